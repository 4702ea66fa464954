use thiserror::Error;

/// Validation errors for domain value objects and configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // ObjectKey validation errors
    #[error("Object key cannot be empty")]
    EmptyObjectKey,

    #[error("Object key too long: {actual} bytes (max: {max})")]
    ObjectKeyTooLong { actual: usize, max: usize },

    #[error("Invalid character in object key: {0:?}")]
    InvalidObjectKeyCharacter(char),

    #[error("Object key cannot start with '/'")]
    ObjectKeyStartsWithSlash,

    #[error("Object key cannot contain '//'")]
    ObjectKeyContainsDoubleSlash,

    #[error("Object key {key:?} is not addressable in object storage: {reason}")]
    UnaddressableObjectKey { key: String, reason: String },

    // BucketName validation errors
    #[error("Bucket name cannot be empty")]
    EmptyBucketName,

    #[error("Bucket name too short: {actual} characters (min: {min})")]
    BucketNameTooShort { actual: usize, min: usize },

    #[error("Bucket name too long: {actual} characters (max: {max})")]
    BucketNameTooLong { actual: usize, max: usize },

    #[error("Bucket name must start with a lowercase letter or number")]
    BucketNameInvalidStart,

    #[error("Bucket name must end with a lowercase letter or number")]
    BucketNameInvalidEnd,

    #[error("Invalid character in bucket name: {0:?}")]
    BucketNameInvalidCharacter(char),

    // Configuration validation errors
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid value for {field}: '{value}' (expected {expected})")]
    InvalidField {
        field: String,
        value: String,
        expected: String,
    },
}
