//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活 + 存储后端检查 |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "storage": "postgres", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    version: &'static str,
    /// 存储后端 (postgres | memory)
    storage: &'static str,
    /// 存储检查结果 (ok | error)
    database: &'static str,
}

/// GET /health - 健康检查
///
/// 进程存活时总是返回 200，存储不可用时 status 为 degraded。
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match state.repos.stores.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check: storage ping failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage: state.backend.as_str(),
        database,
    })
}
