//! Business Partner API Handlers

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
use shared::models::{BusinessPartner, BusinessPartnerCreate, BusinessPartnerType, MasterIdResponse};

use crate::core::ServerState;
use crate::utils::pagination::PageQuery;
use crate::utils::validation::{non_blank, parse_id};
use crate::utils::{ApiResponse, AppResult};

/// List query: `?page=&limit=&partner_type=`
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub partner_type: Option<String>,
}

/// GET /api/business-partners/next-master-id - 下一个主编号 (预览，不保留)
pub async fn next_master_id(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<MasterIdResponse>> {
    let master_id = state.services.partners.next_master_id().await?;
    Ok(ApiResponse::success(MasterIdResponse { master_id }))
}

/// GET /api/business-partners/types - 合作方类型列表
pub async fn types(State(state): State<ServerState>) -> Json<Vec<BusinessPartnerType>> {
    Json(state.services.partners.types().await)
}

/// GET /api/business-partners - 分页列表
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<PaginatedResponse<BusinessPartner>>> {
    let Query(query) = query?;
    let page = PageQuery::new(query.page, query.limit).resolve()?;
    let partner_type = non_blank(query.partner_type);
    let partners = state
        .services
        .partners
        .list(partner_type.as_deref(), page)
        .await?;
    Ok(Json(partners))
}

/// GET /api/business-partners/:id - 获取单个合作方
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BusinessPartner>> {
    let id = parse_id(&id, "business partner")?;
    let partner = state.services.partners.get(id).await?;
    Ok(Json(partner))
}

/// POST /api/business-partners - 创建合作方 (自动分配主编号)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<BusinessPartnerCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BusinessPartner>)> {
    let Json(payload) = payload?;
    let partner = state.services.partners.create(payload).await?;
    Ok((StatusCode::CREATED, Json(partner)))
}
