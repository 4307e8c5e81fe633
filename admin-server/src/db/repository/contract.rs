//! Employment Contract Repository
//!
//! Every read filters soft-deleted headers; sub-records (salary, schedules)
//! are never deleted and are only reachable through a live header.

use async_trait::async_trait;
use shared::models::{
    ContractFilter, ContractListItem, ContractSalary, ContractUpdate, ContractWorkSchedule,
    EmploymentContract, NewContract, SalaryUpsert, ScheduleUpsert,
};
use sqlx::PgPool;

use super::RepoResult;

/// `SELECT` over live contract headers; `$tail` continues the WHERE clause.
macro_rules! live_contracts {
    ($tail:literal) => {
        concat!(
            "SELECT * FROM employment_contracts WHERE is_deleted = FALSE ",
            $tail
        )
    };
}

/// Live contract headers joined with the employee name.
macro_rules! live_contract_items {
    ($tail:literal) => {
        concat!(
            "SELECT c.*, e.name AS employee_name FROM employment_contracts c
             LEFT JOIN employees e ON e.id = c.employee_id
             WHERE c.is_deleted = FALSE ",
            $tail
        )
    };
}

#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn create(&self, data: NewContract) -> RepoResult<EmploymentContract>;

    /// Live contract header
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmploymentContract>>;

    /// One page of live contracts (newest first) plus the total match count
    async fn list(
        &self,
        filter: &ContractFilter,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<ContractListItem>, i64)>;

    /// Partial header update; `None` when the contract is missing or deleted
    async fn update(
        &self,
        id: i64,
        data: ContractUpdate,
        now: i64,
    ) -> RepoResult<Option<EmploymentContract>>;

    /// Flag a live contract as deleted; `false` when there was none
    async fn soft_delete(&self, id: i64, now: i64) -> RepoResult<bool>;

    async fn find_salary(&self, contract_id: i64) -> RepoResult<Option<ContractSalary>>;

    async fn upsert_salary(
        &self,
        contract_id: i64,
        data: SalaryUpsert,
        now: i64,
    ) -> RepoResult<ContractSalary>;

    /// Schedules ordered by day type
    async fn find_schedules(&self, contract_id: i64) -> RepoResult<Vec<ContractWorkSchedule>>;

    /// Upsert one row per day type, returning every schedule of the contract
    async fn upsert_schedules(
        &self,
        contract_id: i64,
        rows: Vec<ScheduleUpsert>,
        now: i64,
    ) -> RepoResult<Vec<ContractWorkSchedule>>;
}

#[derive(Clone)]
pub struct PgContractRepository {
    pool: PgPool,
}

impl PgContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContractRepository for PgContractRepository {
    async fn create(&self, data: NewContract) -> RepoResult<EmploymentContract> {
        let row = sqlx::query_as(
            "INSERT INTO employment_contracts (
                employee_id, store_id, status, is_electronic_signed,
                company_name, store_name, brand_name, job_description,
                salary_type, pay_cycle, pay_day,
                contract_start_date, contract_end_date, work_start_date,
                created_by, created_at, updated_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $16)
             RETURNING *",
        )
        .bind(data.employee_id)
        .bind(data.store_id)
        .bind(data.status)
        .bind(data.is_electronic_signed)
        .bind(data.company_name)
        .bind(data.store_name)
        .bind(data.brand_name)
        .bind(data.job_description)
        .bind(data.salary_type)
        .bind(data.pay_cycle)
        .bind(data.pay_day)
        .bind(data.contract_start_date)
        .bind(data.contract_end_date)
        .bind(data.work_start_date)
        .bind(data.created_by)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmploymentContract>> {
        let row = sqlx::query_as(live_contracts!("AND id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(
        &self,
        filter: &ContractFilter,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<ContractListItem>, i64)> {
        let rows: Vec<ContractListItem> = sqlx::query_as(live_contract_items!(
            "AND ($1::BIGINT[] IS NULL OR c.employee_id = ANY($1))
             AND ($2::contract_status IS NULL OR c.status = $2)
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $3 OFFSET $4"
        ))
        .bind(filter.employee_ids.as_deref())
        .bind(filter.status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM employment_contracts
             WHERE is_deleted = FALSE
               AND ($1::BIGINT[] IS NULL OR employee_id = ANY($1))
               AND ($2::contract_status IS NULL OR status = $2)",
        )
        .bind(filter.employee_ids.as_deref())
        .bind(filter.status)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows, total))
    }

    async fn update(
        &self,
        id: i64,
        data: ContractUpdate,
        now: i64,
    ) -> RepoResult<Option<EmploymentContract>> {
        let row = sqlx::query_as(
            "UPDATE employment_contracts SET
                status = COALESCE($2, status),
                is_electronic_signed = COALESCE($3, is_electronic_signed),
                company_name = COALESCE($4, company_name),
                store_name = COALESCE($5, store_name),
                brand_name = COALESCE($6, brand_name),
                job_description = COALESCE($7, job_description),
                salary_type = COALESCE($8, salary_type),
                pay_cycle = COALESCE($9, pay_cycle),
                pay_day = COALESCE($10, pay_day),
                contract_start_date = COALESCE($11, contract_start_date),
                contract_end_date = COALESCE($12, contract_end_date),
                work_start_date = COALESCE($13, work_start_date),
                updated_at = $14
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING *",
        )
        .bind(id)
        .bind(data.status)
        .bind(data.is_electronic_signed)
        .bind(data.company_name)
        .bind(data.store_name)
        .bind(data.brand_name)
        .bind(data.job_description)
        .bind(data.salary_type)
        .bind(data.pay_cycle)
        .bind(data.pay_day)
        .bind(data.contract_start_date)
        .bind(data.contract_end_date)
        .bind(data.work_start_date)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn soft_delete(&self, id: i64, now: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE employment_contracts SET is_deleted = TRUE, updated_at = $2
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_salary(&self, contract_id: i64) -> RepoResult<Option<ContractSalary>> {
        let row = sqlx::query_as("SELECT * FROM contract_salaries WHERE contract_id = $1")
            .bind(contract_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn upsert_salary(
        &self,
        contract_id: i64,
        data: SalaryUpsert,
        now: i64,
    ) -> RepoResult<ContractSalary> {
        let row = sqlx::query_as(
            "INSERT INTO contract_salaries (contract_id, annual_salary, monthly_salary, hourly_wage, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (contract_id) DO UPDATE SET
                annual_salary = EXCLUDED.annual_salary,
                monthly_salary = EXCLUDED.monthly_salary,
                hourly_wage = EXCLUDED.hourly_wage,
                updated_at = EXCLUDED.updated_at
             RETURNING *",
        )
        .bind(contract_id)
        .bind(data.annual_salary)
        .bind(data.monthly_salary)
        .bind(data.hourly_wage)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_schedules(&self, contract_id: i64) -> RepoResult<Vec<ContractWorkSchedule>> {
        let rows = sqlx::query_as(
            "SELECT * FROM contract_work_schedules WHERE contract_id = $1 ORDER BY day_type",
        )
        .bind(contract_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn upsert_schedules(
        &self,
        contract_id: i64,
        rows: Vec<ScheduleUpsert>,
        now: i64,
    ) -> RepoResult<Vec<ContractWorkSchedule>> {
        for row in rows {
            sqlx::query(
                "INSERT INTO contract_work_schedules (
                    contract_id, day_type, start_time, end_time,
                    break_start_time, break_end_time, updated_at
                 ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                 ON CONFLICT (contract_id, day_type) DO UPDATE SET
                    start_time = EXCLUDED.start_time,
                    end_time = EXCLUDED.end_time,
                    break_start_time = EXCLUDED.break_start_time,
                    break_end_time = EXCLUDED.break_end_time,
                    updated_at = EXCLUDED.updated_at",
            )
            .bind(contract_id)
            .bind(row.day_type)
            .bind(row.start_time)
            .bind(row.end_time)
            .bind(row.break_start_time)
            .bind(row.break_end_time)
            .bind(now)
            .execute(&self.pool)
            .await?;
        }
        self.find_schedules(contract_id).await
    }
}
