//! Repository Module
//!
//! Typed access to the containers in [`LocalStore`]. Each repository owns one
//! namespace key; cross-container writes (price edits plus their audit
//! record) share a single write transaction.

pub mod customer;
pub mod order;
pub mod price_history;
pub mod product;
pub mod settings;
pub mod shopping_list;

// Re-exports
pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use price_history::PriceHistoryRepository;
pub use product::ProductRepository;
pub use settings::SettingsRepository;
pub use shopping_list::ShoppingListRepository;

use shared::error::ErrorCode;
use thiserror::Error;

use super::StorageError;
use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::InvalidPrice(msg) => {
                AppError::with_message(ErrorCode::ProductInvalidPrice, msg)
            }
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Storage(e) => e.into(),
        }
    }
}
