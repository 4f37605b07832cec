//! Storage error types.
//!
//! Used by repository implementations and callers of storage APIs.

use chatterbox_core::ValidationError;
use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Message not found: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}
