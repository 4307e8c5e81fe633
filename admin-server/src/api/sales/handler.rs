//! Sales API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use shared::models::DailySales;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppResult, time};

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    /// YYYY-MM-DD, defaults to today in the business time zone
    pub date: Option<String>,
}

/// GET /api/sales/daily - 门店单日销售汇总
pub async fn daily(
    State(state): State<ServerState>,
    user: CurrentUser,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> AppResult<Json<DailySales>> {
    let Query(query) = query?;
    let date = time::date_or_today(query.date.as_deref(), state.config.business_offset())?;
    let summary = state.services.sales.daily(user.store_id, date).await?;
    Ok(Json(DailySales {
        store_id: user.store_id,
        date,
        summary,
    }))
}
