//! Storage error types.
//!
//! Provides error handling for persistence operations using `thiserror`.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key cannot be mapped to a storage location.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading or writing a key.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
