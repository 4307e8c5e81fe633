//! Pagination types shared by list endpoints

use serde::{Deserialize, Serialize};

/// Paginated response: `{ data, pagination }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: u32,
    /// Number of items per page
    pub limit: u32,
    /// Total number of items matching the filters
    pub total: u64,
    /// `ceil(total / limit)`, zero when there are no items
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, limit, total),
        }
    }

    /// Empty page with correct metadata for zero matches
    pub fn empty(page: u32, limit: u32) -> Self {
        Self::new(Vec::new(), page, limit, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(PaginationMeta::new(1, 10, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 10, 1).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 10, 10).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 10, 11).total_pages, 2);
        assert_eq!(PaginationMeta::new(1, 3, 7).total_pages, 3);
    }

    #[test]
    fn test_serialized_field_names() {
        let response: PaginatedResponse<i32> = PaginatedResponse::new(vec![1, 2], 2, 2, 5);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pagination"]["totalPages"], 3);
        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
