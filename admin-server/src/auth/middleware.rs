//! 身份中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;

/// 解析请求身份并写入 extensions
///
/// 后续的日志中间件和 [`CurrentUser`](crate::auth::CurrentUser) 提取器都从
/// extensions 读取，同一请求只解析一次。
pub async fn attach_identity(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();
    match state.identity.resolve(&parts) {
        Ok(user) => {
            parts.extensions.insert(user);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(e) => {
            tracing::warn!(
                target: "security",
                uri = %parts.uri,
                error = %e,
                "Identity resolution failed"
            );
            e.into_response()
        }
    }
}
