use thiserror::Error;

use crate::domain::{
    errors::ValidationError,
    models::{ObjectLocation, TextEncoding},
    value_objects::BucketName,
};

/// Errors that can occur while talking to the storage service
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Object not found
    #[error("Object not found: {location}")]
    ObjectNotFound { location: ObjectLocation },

    /// A handle for the bucket could not be created
    #[error("Bucket '{bucket}' could not be resolved: {message}")]
    BucketUnavailable { bucket: BucketName, message: String },

    /// Object bytes are not valid text in the requested encoding
    #[error("Failed to decode {location} as {encoding}: {message}")]
    DecodeError {
        location: ObjectLocation,
        encoding: TextEncoding,
        message: String,
    },

    /// A bucket or object name failed validation before any remote call
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// Infrastructure error reported by the storage backend
    #[error("Infrastructure error: {message}")]
    InfrastructureError {
        message: String,
        // Kept as a string so the error stays Clone
        detail: Option<String>,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of a copy-then-delete relocation.
///
/// The two steps are not atomic. `DeleteFailed` means the copy landed and the
/// source is still in place, so the object now exists at both locations.
#[derive(Debug, Clone, Error)]
pub enum MoveError {
    #[error("Source and target are the same location: {location}")]
    SameLocation { location: ObjectLocation },

    #[error("Invalid relocation target: {0}")]
    InvalidTarget(#[from] ValidationError),

    #[error("Copy to target failed: {source}")]
    CopyFailed { source: StorageError },

    #[error("Source delete failed after copy; object exists at both locations: {source}")]
    DeleteFailed { source: StorageError },
}

impl MoveError {
    /// True when the target was written but the source could not be removed
    pub fn is_partial(&self) -> bool {
        matches!(self, MoveError::DeleteFailed { .. })
    }
}
