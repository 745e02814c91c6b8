//! Utilities - shared helper functions and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - API response structure (from shared::error)
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - input length limits and validator glue

pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
