//! Payslip API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use shared::PaginatedResponse;
use shared::models::{EmailStatusUpdate, Payslip, PayslipFilter};

use crate::core::ServerState;
use crate::utils::pagination::PageQuery;
use crate::utils::validation::{non_blank, parse_id};
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "payslip";

/// List query: `?page=&limit=&employee_id=&pay_period=`
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub employee_id: Option<i64>,
    /// YYYY-MM
    pub pay_period: Option<String>,
}

fn validate_pay_period(period: &str) -> AppResult<()> {
    let valid = period.len() == 7
        && chrono::NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").is_ok();
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid pay_period: {period} (expected YYYY-MM)"
        )))
    }
}

/// GET /api/payslips - 分页列表
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<PaginatedResponse<Payslip>>> {
    let Query(query) = query?;
    let page = PageQuery::new(query.page, query.limit).resolve()?;
    let pay_period = non_blank(query.pay_period);
    if let Some(period) = &pay_period {
        validate_pay_period(period)?;
    }

    let filter = PayslipFilter {
        employee_id: query.employee_id,
        pay_period,
    };
    let payslips = state.services.payslips.list(filter, page).await?;
    Ok(Json(payslips))
}

/// GET /api/payslips/:id - 获取单个工资单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payslip>> {
    let id = parse_id(&id, RESOURCE)?;
    let payslip = state.services.payslips.get(id).await?;
    Ok(Json(payslip))
}

/// POST /api/payslips/:id/email - 更新邮件发送状态
pub async fn update_email_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmailStatusUpdate>, JsonRejection>,
) -> AppResult<Json<Payslip>> {
    let id = parse_id(&id, RESOURCE)?;
    let Json(payload) = payload?;
    let payslip = state
        .services
        .payslips
        .update_email_status(id, payload.email_status.as_deref())
        .await?;
    Ok(Json(payslip))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pay_period() {
        assert!(validate_pay_period("2025-03").is_ok());
        assert!(validate_pay_period("2025-13").is_err());
        assert!(validate_pay_period("2025-3").is_err());
        assert!(validate_pay_period("March").is_err());
    }
}
