//! 身份模块
//!
//! 没有登录体系：每个请求通过注入的 [`IdentityResolver`] 解析出
//! [`CurrentUser`]，只读地用于本次请求。
//! - [`CurrentUser`] - 当前用户/门店上下文
//! - [`FixedIdentity`] - 由配置给出的固定身份
//! - [`attach_identity`] - 解析身份并放入 request extensions 的中间件

pub mod extractor;
pub mod identity;
pub mod middleware;

pub use identity::{CurrentUser, FixedIdentity, IdentityResolver};
pub use middleware::attach_identity;
