//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! PostgreSQL TEXT has no built-in length enforcement, so limits live here.

use std::str::FromStr;

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: partner, store, employee, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, job descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Short identifiers: phone, business number, type codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Free-text search terms
pub const MAX_SEARCH_LEN: usize = 100;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

/// Unwrap a required payload field or fail naming it.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::required_field(field))
}

/// Parse a path identifier (positive integer).
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(
            AppError::validation(format!("Invalid {resource} ID: {raw}")).with_detail("id", raw)
        ),
    }
}

/// Parse a wire enum from a query/body string, reporting `code` on failure.
pub fn parse_enum<T>(raw: &str, code: ErrorCode) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    raw.trim()
        .parse::<T>()
        .map_err(|msg| AppError::with_message(code, msg).with_detail("value", raw))
}

/// Treat blank optional query strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EmailStatus;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("본사", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("abcdef", "name", 5).is_err());
        // limits count characters, not bytes
        assert!(validate_required_text("가나다", "name", 3).is_ok());
    }

    #[test]
    fn test_validate_optional_text() {
        assert!(validate_optional_text(&None, "phone", 3).is_ok());
        assert!(validate_optional_text(&Some("1234".into()), "phone", 3).is_err());
    }

    #[test]
    fn test_require_names_missing_field() {
        let err = require::<i64>(None, "employee_id").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(err.message.contains("employee_id"));
        assert_eq!(require(Some(5), "employee_id").unwrap(), 5);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "contract").unwrap(), 42);
        assert!(parse_id("0", "contract").is_err());
        assert!(parse_id("-3", "contract").is_err());
        assert!(parse_id("abc", "contract").is_err());
    }

    #[test]
    fn test_parse_enum() {
        let status: EmailStatus =
            parse_enum(" SENT ", ErrorCode::PayslipEmailStatusInvalid).unwrap();
        assert_eq!(status, EmailStatus::Sent);

        let err = parse_enum::<EmailStatus>("BOUNCED", ErrorCode::PayslipEmailStatusInvalid)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PayslipEmailStatusInvalid);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  김 ".into())), Some("김".to_string()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
