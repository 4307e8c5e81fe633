//! Store Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::attendance::WorkingEmployee;

/// Store entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub brand_name: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Operational snapshot of one store for the current business day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatus {
    pub store_name: String,
    /// Sum of today's order amounts
    pub today_sales: Decimal,
    /// Revenue per payment type; only types that occurred are present
    pub sales_by_payment_type: BTreeMap<String, Decimal>,
    /// Placeholder figure, supplied by configuration
    pub deposit_amount: Decimal,
    /// Placeholder figure, supplied by configuration
    pub withdraw_amount: Decimal,
    pub working_employees: Vec<WorkingEmployee>,
    /// Business date (YYYY-MM-DD)
    pub date: chrono::NaiveDate,
}
