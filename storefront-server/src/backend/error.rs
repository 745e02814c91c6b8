//! Hosted backend error types

use thiserror::Error;

use crate::utils::AppError;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport failure (DNS, TLS, timeout, connection reset)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication rejected")]
    Unauthorized,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Constraint or payload rejected by the service
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Service error ({status}): {body}")]
    Service { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::backend(err.to_string())
    }
}
