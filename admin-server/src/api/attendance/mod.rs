//! Attendance API 模块 (上下班打卡)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/working", get(handler::working))
        .route("/clock-in", post(handler::clock_in))
        .route("/clock-out", post(handler::clock_out))
}
