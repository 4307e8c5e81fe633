//! Repository Module
//!
//! Storage traits for every aggregate, with PostgreSQL implementations.
//! The in-memory implementations live in [`crate::db::memory`].

pub mod attendance;
pub mod business_partner;
pub mod contract;
pub mod employee;
pub mod order;
pub mod payslip;
pub mod store;

// Re-exports
pub use attendance::{AttendanceRepository, PgAttendanceRepository};
pub use business_partner::{BusinessPartnerRepository, PgBusinessPartnerRepository};
pub use contract::{ContractRepository, PgContractRepository};
pub use employee::{EmployeeRepository, PgEmployeeRepository};
pub use order::{OrderRepository, PgOrderRepository};
pub use payslip::{PayslipRepository, PgPayslipRepository};
pub use store::{PgStoreRepository, StoreRepository};

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::db::memory::MemoryStore;
use crate::utils::AppError;

/// PostgreSQL unique_violation
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) => {
                RepoError::Duplicate(db_err.constraint().unwrap_or("unique").to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(format!("Duplicate: {msg}")),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                // driver text stays in the log, never in the response
                tracing::error!(error = %msg, "Database error");
                AppError::database("Database error")
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// All repositories behind trait objects
///
/// Services only see the traits, so PostgreSQL and the in-memory store are
/// interchangeable.
#[derive(Clone)]
pub struct Repositories {
    pub attendance: Arc<dyn AttendanceRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub contracts: Arc<dyn ContractRepository>,
    pub stores: Arc<dyn StoreRepository>,
    pub partners: Arc<dyn BusinessPartnerRepository>,
    pub payslips: Arc<dyn PayslipRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            attendance: Arc::new(PgAttendanceRepository::new(pool.clone())),
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool.clone())),
            contracts: Arc::new(PgContractRepository::new(pool.clone())),
            stores: Arc::new(PgStoreRepository::new(pool.clone())),
            partners: Arc::new(PgBusinessPartnerRepository::new(pool.clone())),
            payslips: Arc::new(PgPayslipRepository::new(pool)),
        }
    }

    /// In-memory repositories sharing one store
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            attendance: store.clone(),
            employees: store.clone(),
            orders: store.clone(),
            contracts: store.clone(),
            stores: store.clone(),
            partners: store.clone(),
            payslips: store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;
    use http::StatusCode;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: RepoError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[test]
    fn test_database_error_does_not_leak_driver_text() {
        let err: AppError =
            RepoError::Database("relation \"payslips\" does not exist".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database error");
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_repo_error_status_mapping() {
        let err: AppError = RepoError::Validation("bad".into()).into();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err: AppError = RepoError::Duplicate("uq".into()).into();
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError = RepoError::NotFound("Contract 3".into()).into();
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }
}
