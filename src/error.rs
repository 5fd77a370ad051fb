//! Unified application error types
//!
//! Provides a single error type for the entire application,
//! suitable for returning from Tauri commands.

use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database or repository error
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// File operation error
    #[error("file operation error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to acquire the database lock
    #[error("database lock error")]
    LockError,

    /// Requested resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Serializable error response for Tauri IPC
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::LockError => "LOCK_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// Implement Serialize for AppError to make it work with Tauri commands
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let response = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        response.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_error_serialization() {
        let err = AppError::internal("test error");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("INTERNAL_ERROR"));
        assert!(json.contains("test error"));
    }

    #[test]
    fn test_storage_error_code() {
        let err = AppError::from(StorageError::NotFound("animal 5".into()));
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("STORAGE_ERROR"));
    }
}
