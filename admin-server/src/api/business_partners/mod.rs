//! Business Partner API 模块 (合作方)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/business-partners", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/next-master-id", get(handler::next_master_id))
        .route("/types", get(handler::types))
        .route("/{id}", get(handler::get_by_id))
}
