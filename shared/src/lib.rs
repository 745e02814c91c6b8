//! Shared types for the Super Empire storefront
//!
//! Domain records persisted by the storefront server (products, orders,
//! customers, price history, shopping lists, settings) and the unified
//! error/response types used at every API boundary.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
