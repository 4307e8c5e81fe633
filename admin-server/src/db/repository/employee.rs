//! Employee Repository

use async_trait::async_trait;
use shared::models::EmployeeSnapshot;
use sqlx::PgPool;

use super::RepoResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Display name of one employee
    async fn find_name(&self, employee_id: i64) -> RepoResult<Option<String>>;

    async fn find_snapshot(&self, employee_id: i64) -> RepoResult<Option<EmployeeSnapshot>>;

    /// Ids of employees whose name contains `term` (case-insensitive)
    async fn search_ids_by_name(&self, term: &str) -> RepoResult<Vec<i64>>;
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards in a user-provided term
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_name(&self, employee_id: i64) -> RepoResult<Option<String>> {
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM employees WHERE id = $1")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(name)
    }

    async fn find_snapshot(&self, employee_id: i64) -> RepoResult<Option<EmployeeSnapshot>> {
        let row = sqlx::query_as(
            "SELECT id, store_id, name, phone, email, position FROM employees WHERE id = $1",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn search_ids_by_name(&self, term: &str) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar("SELECT id FROM employees WHERE name ILIKE $1 ORDER BY id")
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }
}
