//! Attendance API Handlers

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use shared::models::{AttendanceSession, ClockRequest, WorkingEmployee};
use shared::util::now_millis;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::validation::require;
use crate::utils::{AppResult, time};

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    /// YYYY-MM-DD, defaults to today in the business time zone
    pub date: Option<String>,
}

/// GET /api/attendance/working - 当前在岗员工
pub async fn working(
    State(state): State<ServerState>,
    user: CurrentUser,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> AppResult<Json<Vec<WorkingEmployee>>> {
    let Query(query) = query?;
    let date = time::date_or_today(query.date.as_deref(), state.config.business_offset())?;
    let working = state
        .services
        .attendance
        .working_employees(user.store_id, date)
        .await?;
    Ok(Json(working))
}

/// POST /api/attendance/clock-in - 上班打卡
pub async fn clock_in(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<ClockRequest>, JsonRejection>,
) -> AppResult<Json<AttendanceSession>> {
    let Json(payload) = payload?;
    let employee_id = require(payload.employee_id, "employee_id")?;
    let today = time::today(state.config.business_offset());
    let session = state
        .services
        .attendance
        .clock_in(employee_id, user.store_id, today, now_millis())
        .await?;
    Ok(Json(session))
}

/// POST /api/attendance/clock-out - 下班打卡
pub async fn clock_out(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<ClockRequest>, JsonRejection>,
) -> AppResult<Json<AttendanceSession>> {
    let Json(payload) = payload?;
    let employee_id = require(payload.employee_id, "employee_id")?;
    let today = time::today(state.config.business_offset());
    let session = state
        .services
        .attendance
        .clock_out(employee_id, user.store_id, today, now_millis())
        .await?;
    Ok(Json(session))
}
