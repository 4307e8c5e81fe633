//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee snapshot embedded in contract reads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeSnapshot {
    pub id: i64,
    pub store_id: Option<i64>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}
