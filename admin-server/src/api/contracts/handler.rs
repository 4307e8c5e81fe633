//! Employment Contract API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use shared::PaginatedResponse;
use shared::models::{
    ContractCreate, ContractDetail, ContractListItem, ContractSalary, ContractStatus,
    ContractUpdate, ContractWorkSchedule, EmploymentContract, SalaryUpsert, ScheduleUpsert,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::ContractListQuery;
use crate::utils::pagination::PageQuery;
use crate::utils::validation::{
    MAX_SEARCH_LEN, non_blank, parse_enum, parse_id, validate_optional_text,
};
use crate::utils::{ApiResponse, AppResult, ErrorCode};

const RESOURCE: &str = "contract";

/// List query: `?page=&limit=&search=&status=`
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Employee name substring
    pub search: Option<String>,
    pub status: Option<String>,
}

/// GET /api/contracts - 分页列表 (按员工姓名搜索、按状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<PaginatedResponse<ContractListItem>>> {
    let Query(query) = query?;
    let page = PageQuery::new(query.page, query.limit).resolve()?;

    let search = non_blank(query.search);
    validate_optional_text(&search, "search", MAX_SEARCH_LEN)?;
    let status = non_blank(query.status)
        .map(|raw| parse_enum::<ContractStatus>(&raw, ErrorCode::ContractStatusInvalid))
        .transpose()?;

    let contracts = state
        .services
        .contracts
        .list(ContractListQuery { search, status }, page)
        .await?;
    Ok(Json(contracts))
}

/// GET /api/contracts/:id - 合同详情 (含员工、门店、工资、工作时间表)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContractDetail>> {
    let id = parse_id(&id, RESOURCE)?;
    let detail = state.services.contracts.detail(id).await?;
    Ok(Json(detail))
}

/// POST /api/contracts - 创建合同
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<ContractCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmploymentContract>)> {
    let Json(payload) = payload?;
    let contract = state.services.contracts.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(contract)))
}

/// PUT /api/contracts/:id - 更新合同头
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ContractUpdate>, JsonRejection>,
) -> AppResult<Json<EmploymentContract>> {
    let id = parse_id(&id, RESOURCE)?;
    let Json(payload) = payload?;
    let contract = state.services.contracts.update(id, payload).await?;
    Ok(Json(contract))
}

/// DELETE /api/contracts/:id - 删除合同 (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id, RESOURCE)?;
    state.services.contracts.delete(id).await?;
    Ok(ApiResponse::ok_with_message("삭제되었습니다."))
}

/// PUT /api/contracts/:id/salary - 保存工资
pub async fn upsert_salary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<SalaryUpsert>, JsonRejection>,
) -> AppResult<Json<ContractSalary>> {
    let id = parse_id(&id, RESOURCE)?;
    let Json(payload) = payload?;
    let salary = state.services.contracts.upsert_salary(id, payload).await?;
    Ok(Json(salary))
}

/// PUT /api/contracts/:id/schedules - 保存工作时间表
pub async fn upsert_schedules(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<Vec<ScheduleUpsert>>, JsonRejection>,
) -> AppResult<Json<Vec<ContractWorkSchedule>>> {
    let id = parse_id(&id, RESOURCE)?;
    let Json(rows) = payload?;
    let schedules = state.services.contracts.upsert_schedules(id, rows).await?;
    Ok(Json(schedules))
}
