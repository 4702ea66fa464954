use crate::domain::{
    errors::StorageError,
    models::ObjectLocation,
    value_objects::BucketName,
};

/// Convert an object_store error raised while operating on `location`
pub(crate) fn from_store_error(
    err: object_store::Error,
    location: &ObjectLocation,
    operation: &str,
) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound {
            location: location.clone(),
        },
        _ => StorageError::InfrastructureError {
            message: format!("Failed to {} {}: {}", operation, location, err),
            detail: Some(err.to_string()),
        },
    }
}

/// Convert an error raised while building a store handle for `bucket`
pub(crate) fn from_connect_error(err: object_store::Error, bucket: &BucketName) -> StorageError {
    StorageError::BucketUnavailable {
        bucket: bucket.clone(),
        message: err.to_string(),
    }
}
