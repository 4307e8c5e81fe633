//! Unified error codes for the admin console
//!
//! This module defines all error codes used across admin-server and the
//! console frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Identity errors
//! - 2xxx: Store errors
//! - 3xxx: Business partner errors
//! - 4xxx: Contract errors
//! - 5xxx: Payslip errors
//! - 6xxx: Attendance errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Identity ====================
    /// No identity could be resolved for the request
    NotAuthenticated = 1001,
    /// Identity has no store assigned
    StoreNotAssigned = 1002,

    // ==================== 2xxx: Store ====================
    /// Store not found
    StoreNotFound = 2001,

    // ==================== 3xxx: Business Partner ====================
    /// Business partner not found
    BusinessPartnerNotFound = 3001,
    /// Master id allocation kept colliding
    MasterIdConflict = 3002,
    /// Unknown business partner type
    BusinessPartnerTypeInvalid = 3003,

    // ==================== 4xxx: Contract ====================
    /// Contract not found
    ContractNotFound = 4001,
    /// Invalid contract status value
    ContractStatusInvalid = 4002,
    /// Salary does not match the contract salary type
    ContractSalaryInvalid = 4003,
    /// Work schedule rows are inconsistent
    ContractScheduleInvalid = 4004,

    // ==================== 5xxx: Payslip ====================
    /// Payslip not found
    PayslipNotFound = 5001,
    /// Email status outside the allowed set
    PayslipEmailStatusInvalid = 5002,

    // ==================== 6xxx: Attendance ====================
    /// Attendance record not found
    AttendanceNotFound = 6001,
    /// Employee already has an open session
    AlreadyClockedIn = 6002,
    /// Employee has no open session
    NotClockedIn = 6003,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Identity
            ErrorCode::NotAuthenticated => "Identity could not be resolved",
            ErrorCode::StoreNotAssigned => "No store assigned to the current user",

            // Store
            ErrorCode::StoreNotFound => "Store not found",

            // Business Partner
            ErrorCode::BusinessPartnerNotFound => "Business partner not found",
            ErrorCode::MasterIdConflict => "Master id allocation conflicted, please retry",
            ErrorCode::BusinessPartnerTypeInvalid => "Invalid business partner type",

            // Contract
            ErrorCode::ContractNotFound => "계약 정보를 찾을 수 없습니다.",
            ErrorCode::ContractStatusInvalid => "Invalid contract status",
            ErrorCode::ContractSalaryInvalid => "Salary does not match salary type",
            ErrorCode::ContractScheduleInvalid => "Invalid work schedule",

            // Payslip
            ErrorCode::PayslipNotFound => "Payslip not found",
            ErrorCode::PayslipEmailStatusInvalid => "Invalid email status",

            // Attendance
            ErrorCode::AttendanceNotFound => "Attendance record not found",
            ErrorCode::AlreadyClockedIn => "Employee is already clocked in",
            ErrorCode::NotClockedIn => "Employee is not clocked in",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Identity
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::StoreNotAssigned),

            // Store
            2001 => Ok(ErrorCode::StoreNotFound),

            // Business Partner
            3001 => Ok(ErrorCode::BusinessPartnerNotFound),
            3002 => Ok(ErrorCode::MasterIdConflict),
            3003 => Ok(ErrorCode::BusinessPartnerTypeInvalid),

            // Contract
            4001 => Ok(ErrorCode::ContractNotFound),
            4002 => Ok(ErrorCode::ContractStatusInvalid),
            4003 => Ok(ErrorCode::ContractSalaryInvalid),
            4004 => Ok(ErrorCode::ContractScheduleInvalid),

            // Payslip
            5001 => Ok(ErrorCode::PayslipNotFound),
            5002 => Ok(ErrorCode::PayslipEmailStatusInvalid),

            // Attendance
            6001 => Ok(ErrorCode::AttendanceNotFound),
            6002 => Ok(ErrorCode::AlreadyClockedIn),
            6003 => Ok(ErrorCode::NotClockedIn),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::StoreNotFound.code(), 2001);
        assert_eq!(ErrorCode::MasterIdConflict.code(), 3002);
        assert_eq!(ErrorCode::ContractNotFound.code(), 4001);
        assert_eq!(ErrorCode::PayslipEmailStatusInvalid.code(), 5002);
        assert_eq!(ErrorCode::AlreadyClockedIn.code(), 6002);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::ContractNotFound));
        assert_eq!(ErrorCode::try_from(9005), Ok(ErrorCode::ConfigError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(7001), Err(InvalidErrorCode(7001)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::ContractNotFound).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("4999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "E0000");
        assert_eq!(format!("{}", ErrorCode::PayslipNotFound), "E5001");
    }

    #[test]
    fn test_contract_not_found_message() {
        assert_eq!(
            ErrorCode::ContractNotFound.message(),
            "계약 정보를 찾을 수 없습니다."
        );
    }

    #[test]
    fn test_every_code_roundtrips_through_u16() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::NotAuthenticated,
            ErrorCode::StoreNotAssigned,
            ErrorCode::StoreNotFound,
            ErrorCode::BusinessPartnerNotFound,
            ErrorCode::MasterIdConflict,
            ErrorCode::BusinessPartnerTypeInvalid,
            ErrorCode::ContractNotFound,
            ErrorCode::ContractStatusInvalid,
            ErrorCode::ContractSalaryInvalid,
            ErrorCode::ContractScheduleInvalid,
            ErrorCode::PayslipNotFound,
            ErrorCode::PayslipEmailStatusInvalid,
            ErrorCode::AttendanceNotFound,
            ErrorCode::AlreadyClockedIn,
            ErrorCode::NotClockedIn,
            ErrorCode::EmployeeNotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::NetworkError,
            ErrorCode::TimeoutError,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
