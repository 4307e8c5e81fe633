//! 劳动合同聚合管理
//!
//! 合同头 + 工资 + 工作时间表。合同只做软删除，所有读取都排除已删除的合同
//! (在 repository 层过滤)。

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use shared::PaginatedResponse;
use shared::models::{
    ContractCreate, ContractDetail, ContractFilter, ContractListItem, ContractSalary,
    ContractStatus, ContractUpdate, ContractWorkSchedule, EmploymentContract, NewContract,
    SalaryType, SalaryUpsert, ScheduleUpsert,
};
use shared::util::now_millis;

use crate::auth::CurrentUser;
use crate::db::repository::{ContractRepository, EmployeeRepository, StoreRepository};
use crate::utils::pagination::PageRequest;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, require, validate_optional_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// List query after validation
#[derive(Debug, Clone, Default)]
pub struct ContractListQuery {
    /// Employee name substring
    pub search: Option<String>,
    pub status: Option<ContractStatus>,
}

#[derive(Clone)]
pub struct ContractManager {
    contracts: Arc<dyn ContractRepository>,
    employees: Arc<dyn EmployeeRepository>,
    stores: Arc<dyn StoreRepository>,
}

fn contract_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::ContractNotFound).with_detail("id", id)
}

impl ContractManager {
    pub fn new(
        contracts: Arc<dyn ContractRepository>,
        employees: Arc<dyn EmployeeRepository>,
        stores: Arc<dyn StoreRepository>,
    ) -> Self {
        Self {
            contracts,
            employees,
            stores,
        }
    }

    /// Create a contract header.
    ///
    /// Every required field is checked before anything is read or written.
    /// Salary and schedule rows are written separately.
    pub async fn create(
        &self,
        user: &CurrentUser,
        payload: ContractCreate,
    ) -> AppResult<EmploymentContract> {
        let employee_id = require(payload.employee_id, "employee_id")?;
        let salary_type = require(payload.salary_type, "salary_type")?;
        let pay_cycle = require(payload.pay_cycle, "pay_cycle")?;
        let contract_start_date = require(payload.contract_start_date, "contract_start_date")?;
        let work_start_date = require(payload.work_start_date, "work_start_date")?;

        validate_header_text(
            &payload.company_name,
            &payload.store_name,
            &payload.brand_name,
            &payload.job_description,
        )?;
        validate_pay_day(payload.pay_day)?;
        if let Some(end) = payload.contract_end_date
            && end < contract_start_date
        {
            return Err(AppError::validation(
                "contract_end_date must not be before contract_start_date",
            ));
        }

        let store_id = payload.store_id.unwrap_or(user.store_id);
        let (employee, store) = tokio::try_join!(
            async { Ok::<_, AppError>(self.employees.find_name(employee_id).await?) },
            async { Ok::<_, AppError>(self.stores.find_by_id(store_id).await?) },
        )?;
        if employee.is_none() {
            return Err(
                AppError::new(ErrorCode::EmployeeNotFound).with_detail("employee_id", employee_id)
            );
        }
        let store = store.ok_or_else(|| {
            AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", store_id)
        })?;

        let data = NewContract {
            employee_id,
            store_id,
            status: payload.status.unwrap_or_default(),
            is_electronic_signed: payload.is_electronic_signed.unwrap_or(false),
            company_name: payload.company_name.or(store.company_name),
            store_name: payload.store_name.or(Some(store.name)),
            brand_name: payload.brand_name.or(store.brand_name),
            job_description: payload.job_description,
            salary_type,
            pay_cycle,
            pay_day: payload.pay_day,
            contract_start_date,
            contract_end_date: payload.contract_end_date,
            work_start_date,
            created_by: Some(user.user_id),
            created_at: now_millis(),
        };

        let contract = self.contracts.create(data).await?;
        tracing::info!(
            contract_id = contract.id,
            employee_id,
            store_id,
            created_by = user.user_id,
            "Contract created"
        );
        Ok(contract)
    }

    /// Header plus employee, store, salary and schedules.
    ///
    /// Sub-fetches start only after the header is found and run concurrently.
    pub async fn detail(&self, id: i64) -> AppResult<ContractDetail> {
        let contract = self
            .contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| contract_not_found(id))?;

        let (employee, store, salary, schedules) = tokio::try_join!(
            self.employees.find_snapshot(contract.employee_id),
            self.stores.find_by_id(contract.store_id),
            self.contracts.find_salary(id),
            self.contracts.find_schedules(id),
        )?;

        Ok(ContractDetail {
            contract,
            employee,
            store,
            salary,
            schedules,
        })
    }

    /// One page of contracts, newest first
    pub async fn list(
        &self,
        query: ContractListQuery,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<ContractListItem>> {
        let employee_ids = match query.search.as_deref() {
            Some(term) => {
                let ids = self.employees.search_ids_by_name(term).await?;
                if ids.is_empty() {
                    return Ok(PaginatedResponse::empty(page.page, page.limit));
                }
                Some(ids)
            }
            None => None,
        };

        let filter = ContractFilter {
            employee_ids,
            status: query.status,
        };
        let (rows, total) = self
            .contracts
            .list(&filter, page.limit_i64(), page.offset())
            .await?;

        Ok(PaginatedResponse::new(
            rows,
            page.page,
            page.limit,
            u64::try_from(total).unwrap_or(0),
        ))
    }

    pub async fn update(&self, id: i64, payload: ContractUpdate) -> AppResult<EmploymentContract> {
        validate_header_text(
            &payload.company_name,
            &payload.store_name,
            &payload.brand_name,
            &payload.job_description,
        )?;
        validate_pay_day(payload.pay_day)?;

        let current = self
            .contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| contract_not_found(id))?;
        let start = payload
            .contract_start_date
            .unwrap_or(current.contract_start_date);
        if let Some(end) = payload.contract_end_date.or(current.contract_end_date)
            && end < start
        {
            return Err(AppError::validation(
                "contract_end_date must not be before contract_start_date",
            ));
        }

        let updated = self
            .contracts
            .update(id, payload, now_millis())
            .await?
            .ok_or_else(|| contract_not_found(id))?;
        tracing::info!(contract_id = id, "Contract updated");
        Ok(updated)
    }

    /// Write the salary row, checked against the contract's salary type
    pub async fn upsert_salary(&self, id: i64, payload: SalaryUpsert) -> AppResult<ContractSalary> {
        let contract = self
            .contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| contract_not_found(id))?;
        validate_salary(contract.salary_type, &payload)?;

        let salary = self
            .contracts
            .upsert_salary(id, payload, now_millis())
            .await?;
        tracing::info!(contract_id = id, salary_type = %contract.salary_type, "Contract salary saved");
        Ok(salary)
    }

    /// Write schedule rows (one per day type), returning all of them
    pub async fn upsert_schedules(
        &self,
        id: i64,
        rows: Vec<ScheduleUpsert>,
    ) -> AppResult<Vec<ContractWorkSchedule>> {
        validate_schedules(&rows)?;
        if self.contracts.find_by_id(id).await?.is_none() {
            return Err(contract_not_found(id));
        }

        let count = rows.len();
        let schedules = self
            .contracts
            .upsert_schedules(id, rows, now_millis())
            .await?;
        tracing::info!(contract_id = id, rows = count, "Contract schedules saved");
        Ok(schedules)
    }

    /// Soft delete; sub-records are kept
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.contracts.soft_delete(id, now_millis()).await? {
            return Err(contract_not_found(id));
        }
        tracing::info!(contract_id = id, "Contract deleted");
        Ok(())
    }
}

fn validate_header_text(
    company_name: &Option<String>,
    store_name: &Option<String>,
    brand_name: &Option<String>,
    job_description: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(company_name, "company_name", MAX_NAME_LEN)?;
    validate_optional_text(store_name, "store_name", MAX_NAME_LEN)?;
    validate_optional_text(brand_name, "brand_name", MAX_NAME_LEN)?;
    validate_optional_text(job_description, "job_description", MAX_NOTE_LEN)?;
    Ok(())
}

fn validate_pay_day(pay_day: Option<i32>) -> AppResult<()> {
    match pay_day {
        Some(day) if !(1..=31).contains(&day) => Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("pay_day must be between 1 and 31, got {day}"),
        )),
        _ => Ok(()),
    }
}

fn salary_error(msg: impl Into<String>) -> AppError {
    AppError::with_message(ErrorCode::ContractSalaryInvalid, msg)
}

/// The amount matching the salary type is required and positive;
/// every provided amount is non-negative.
fn validate_salary(salary_type: SalaryType, payload: &SalaryUpsert) -> AppResult<()> {
    for (field, value) in [
        ("annual_salary", payload.annual_salary),
        ("monthly_salary", payload.monthly_salary),
        ("hourly_wage", payload.hourly_wage),
    ] {
        if let Some(v) = value
            && v < Decimal::ZERO
        {
            return Err(salary_error(format!("{field} must not be negative")));
        }
    }

    let (field, value) = match salary_type {
        SalaryType::Annual => ("annual_salary", payload.annual_salary),
        SalaryType::Monthly => ("monthly_salary", payload.monthly_salary),
        SalaryType::Hourly => ("hourly_wage", payload.hourly_wage),
    };
    match value {
        Some(v) if v > Decimal::ZERO => Ok(()),
        _ => Err(salary_error(format!(
            "{field} must be a positive amount for {salary_type} contracts"
        ))
        .with_detail("field", field)),
    }
}

fn schedule_error(msg: impl Into<String>) -> AppError {
    AppError::with_message(ErrorCode::ContractScheduleInvalid, msg)
}

fn validate_schedules(rows: &[ScheduleUpsert]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for row in rows {
        let day = row.day_type;
        if !seen.insert(day) {
            return Err(schedule_error(format!("duplicate day_type {day}")));
        }
        if row.start_time >= row.end_time {
            return Err(schedule_error(format!(
                "{day}: start_time must be before end_time"
            )));
        }
        match (row.break_start_time, row.break_end_time) {
            (None, None) => {}
            (Some(bs), Some(be)) => {
                if bs >= be || bs < row.start_time || be > row.end_time {
                    return Err(schedule_error(format!(
                        "{day}: break must lie within working hours"
                    )));
                }
            }
            _ => {
                return Err(schedule_error(format!(
                    "{day}: break_start_time and break_end_time go together"
                )));
            }
        }
    }
    Ok(())
}
