//! Payslip Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payslip email delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "email_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum EmailStatus {
    #[default]
    NotSent,
    Pending,
    Sent,
    Failed,
}

wire_enum!(EmailStatus {
    NotSent => "NOT_SENT",
    Pending => "PENDING",
    Sent => "SENT",
    Failed => "FAILED",
});

/// Payslip entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payslip {
    pub id: i64,
    pub employee_id: i64,
    pub store_id: i64,
    /// Pay period (YYYY-MM)
    pub pay_period: String,
    pub gross_pay: Decimal,
    pub deductions: Decimal,
    pub net_pay: Decimal,
    pub email_status: EmailStatus,
    /// Set when the payslip was marked SENT (Unix millis)
    pub sent_at: Option<i64>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Email status update payload
///
/// Kept as a raw string so an unknown value is reported as an invalid
/// email status rather than a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailStatusUpdate {
    pub email_status: Option<String>,
}

/// Payslip list filter
#[derive(Debug, Clone, Default)]
pub struct PayslipFilter {
    pub employee_id: Option<i64>,
    pub pay_period: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_status_parse() {
        assert_eq!("SENT".parse::<EmailStatus>(), Ok(EmailStatus::Sent));
        assert_eq!("NOT_SENT".parse::<EmailStatus>(), Ok(EmailStatus::NotSent));
        let err = "DELIVERED".parse::<EmailStatus>().unwrap_err();
        assert!(err.contains("NOT_SENT, PENDING, SENT, FAILED"));
    }
}
