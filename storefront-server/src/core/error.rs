use thiserror::Error;

use crate::db::StorageError;
use crate::db::repository::RepoError;
use crate::utils::AppError;

/// Errors that stop the server from starting or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),

    #[error("{0}")]
    App(#[from] AppError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
