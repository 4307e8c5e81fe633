//! Order Model (sales aggregation input)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payment type bucket for orders without a recorded payment type
pub const OTHER_PAYMENT_TYPE: &str = "OTHER";

/// Completed order (immutable once created)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub store_id: i64,
    /// Final charged amount, null treated as zero
    pub final_amount: Option<Decimal>,
    /// CARD / CASH / ...
    pub payment_type: Option<String>,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

/// Daily sales totals for one store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total: Decimal,
    pub by_payment_type: BTreeMap<String, Decimal>,
}

/// Daily sales response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    pub store_id: i64,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub summary: SalesSummary,
}
