//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Identity errors
/// - 2xxx: Store errors
/// - 3xxx: Business partner errors
/// - 4xxx: Contract errors
/// - 5xxx: Payslip errors
/// - 6xxx: Attendance errors
/// - 8xxx: Employee errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Identity errors (1xxx)
    Identity,
    /// Store errors (2xxx)
    Store,
    /// Business partner errors (3xxx)
    BusinessPartner,
    /// Contract errors (4xxx)
    Contract,
    /// Payslip errors (5xxx)
    Payslip,
    /// Attendance errors (6xxx, 7xxx reserved)
    Attendance,
    /// Employee errors (8xxx)
    Employee,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Identity,
            2000..3000 => Self::Store,
            3000..4000 => Self::BusinessPartner,
            4000..5000 => Self::Contract,
            5000..6000 => Self::Payslip,
            6000..8000 => Self::Attendance,
            8000..9000 => Self::Employee,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Identity => "identity",
            Self::Store => "store",
            Self::BusinessPartner => "business_partner",
            Self::Contract => "contract",
            Self::Payslip => "payslip",
            Self::Attendance => "attendance",
            Self::Employee => "employee",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Identity);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Store);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::BusinessPartner);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Contract);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Payslip);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Attendance);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ContractNotFound.category(), ErrorCategory::Contract);
        assert_eq!(ErrorCode::NotClockedIn.category(), ErrorCategory::Attendance);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::BusinessPartner.name(), "business_partner");
        assert_eq!(ErrorCategory::System.name(), "system");
    }
}
