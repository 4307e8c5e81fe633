//! Request identity

use http::request::Parts;
use serde::Serialize;

use crate::core::Config;
use crate::utils::AppResult;

/// 当前用户上下文 (请求级, 只读)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    /// 用户 ID
    pub user_id: i64,
    /// 显示名
    pub display_name: String,
    /// 所属门店 ID
    pub store_id: i64,
}

/// Resolves the identity of an incoming request.
///
/// Handlers never read identity from globals; swapping this resolver is
/// the only change needed to plug in real authentication.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, parts: &Parts) -> AppResult<CurrentUser>;
}

/// Identity fixed by configuration, identical for every request
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user: CurrentUser,
}

impl FixedIdentity {
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(CurrentUser {
            user_id: config.current_user_id,
            display_name: config.current_user_name.clone(),
            store_id: config.current_store_id,
        })
    }
}

impl IdentityResolver for FixedIdentity {
    fn resolve(&self, _parts: &Parts) -> AppResult<CurrentUser> {
        Ok(self.user.clone())
    }
}
