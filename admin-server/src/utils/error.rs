//! 统一错误处理
//!
//! 错误类型统一来自 `shared::error`，这里只做 re-export，
//! 以便 handler 使用 `crate::utils::{AppError, AppResult}`。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::new(ErrorCode::ContractNotFound))
//!
//! // 返回成功响应
//! Ok(Json(ApiResponse::success(data)))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
