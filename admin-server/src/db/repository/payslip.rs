//! Payslip Repository

use async_trait::async_trait;
use shared::models::{EmailStatus, Payslip, PayslipFilter};
use sqlx::PgPool;

use super::RepoResult;

/// `SELECT` over live payslips; `$tail` continues the WHERE clause.
macro_rules! live_payslips {
    ($tail:literal) => {
        concat!("SELECT * FROM payslips WHERE is_deleted = FALSE ", $tail)
    };
}

#[async_trait]
pub trait PayslipRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Payslip>>;

    /// One page (newest period first) plus the total match count
    async fn list(
        &self,
        filter: &PayslipFilter,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<Payslip>, i64)>;

    /// Set the email status; `sent_at` is only written when `Some`.
    /// `None` when the payslip is missing or deleted.
    async fn update_email_status(
        &self,
        id: i64,
        status: EmailStatus,
        sent_at: Option<i64>,
        now: i64,
    ) -> RepoResult<Option<Payslip>>;
}

#[derive(Clone)]
pub struct PgPayslipRepository {
    pool: PgPool,
}

impl PgPayslipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayslipRepository for PgPayslipRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Payslip>> {
        let row = sqlx::query_as(live_payslips!("AND id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(
        &self,
        filter: &PayslipFilter,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<Payslip>, i64)> {
        let rows = sqlx::query_as(live_payslips!(
            "AND ($1::BIGINT IS NULL OR employee_id = $1)
             AND ($2::TEXT IS NULL OR pay_period = $2)
             ORDER BY pay_period DESC, id DESC
             LIMIT $3 OFFSET $4"
        ))
        .bind(filter.employee_id)
        .bind(filter.pay_period.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM payslips
             WHERE is_deleted = FALSE
               AND ($1::BIGINT IS NULL OR employee_id = $1)
               AND ($2::TEXT IS NULL OR pay_period = $2)",
        )
        .bind(filter.employee_id)
        .bind(filter.pay_period.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok((rows, total))
    }

    async fn update_email_status(
        &self,
        id: i64,
        status: EmailStatus,
        sent_at: Option<i64>,
        now: i64,
    ) -> RepoResult<Option<Payslip>> {
        let row = sqlx::query_as(
            "UPDATE payslips SET
                email_status = $2,
                sent_at = COALESCE($3, sent_at),
                updated_at = $4
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(sent_at)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
