//! Page/limit query handling for list endpoints

use serde::Deserialize;

use crate::utils::{AppError, AppResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// `?page=&limit=` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Row offset of the first item on this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl PageQuery {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// Apply defaults and reject out-of-range values
    pub fn resolve(&self) -> AppResult<PageRequest> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if page < 1 {
            return Err(AppError::validation("page must be >= 1"));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        Ok(PageRequest { page, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageQuery::default().resolve().unwrap();
        assert_eq!(req, PageRequest { page: 1, limit: 10 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset() {
        let req = PageQuery {
            page: Some(3),
            limit: Some(20),
        }
        .resolve()
        .unwrap();
        assert_eq!(req.offset(), 40);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(PageQuery { page: Some(0), limit: None }.resolve().is_err());
        assert!(PageQuery { page: None, limit: Some(0) }.resolve().is_err());
        assert!(PageQuery { page: None, limit: Some(101) }.resolve().is_err());
    }
}
