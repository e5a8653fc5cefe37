//! Error Types
//!
//! Errors raised by list operations and the storage layer.

use thiserror::Error;

use crate::models::ItemId;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Result type for storage backends
pub type StorageResult<T> = Result<T, StorageError>;

/// List-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Not found: item {0}")]
    NotFound(ItemId),
    #[error("Index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid file id: {0}")]
    InvalidFileId(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Key-value storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Read failed for key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("Write failed for key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("Serialization failed: {0}")]
    Serialize(String),
}
