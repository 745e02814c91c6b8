//! Hosted backend collaborator
//!
//! Thin REST client for the relational tables the hosted service exposes
//! (`products`, `orders`, `order_items`, `price_history`, `profiles`).
//! Callers log failures and surface them through the notifier.

pub mod client;
pub mod error;

use serde::Serialize;

pub use client::{BackendClient, ProductRow, Profile};
pub use error::{BackendError, BackendResult};

/// `{data, error}` outcome reported to API callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteResult<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> RemoteResult<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl<T> From<BackendResult<T>> for RemoteResult<T> {
    fn from(result: BackendResult<T>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                error: None,
            },
            Err(e) => Self {
                data: None,
                error: Some(e.to_string()),
            },
        }
    }
}
