//! Store Status API Handlers

use axum::{Json, extract::State};
use shared::models::StoreStatus;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/store-status - 当前身份所属门店的今日状态
pub async fn get_status(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<StoreStatus>> {
    let status = state.services.store_status.today(user.store_id).await?;
    Ok(Json(status))
}
