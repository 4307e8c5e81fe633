//! Shared types for the admin console
//!
//! Common types used by admin-server and the console frontend: error codes,
//! response envelopes, domain models and pagination.

pub mod error;
pub mod models;
pub mod pagination;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use pagination::{PaginatedResponse, PaginationMeta};
