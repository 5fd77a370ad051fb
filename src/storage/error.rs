//! Storage module error types
//!
//! Provides error types for database operations.

use thiserror::Error;

/// Storage operation error type
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Requested row does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
