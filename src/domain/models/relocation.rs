use crate::domain::{
    errors::ValidationError,
    value_objects::{BucketName, ObjectKey},
};

/// A fully-resolved object address: bucket plus key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    pub bucket: BucketName,
    pub key: ObjectKey,
}

impl ObjectLocation {
    pub fn new(bucket: BucketName, key: ObjectKey) -> Self {
        Self { bucket, key }
    }

    /// Validate raw names into a location. Empty names are rejected here, so
    /// an unresolved address never reaches the storage service.
    pub fn parse(bucket: &str, key: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            bucket: BucketName::new(bucket)?,
            key: ObjectKey::new(key)?,
        })
    }
}

impl std::fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

/// Request to move an object from `source` to `target`
#[derive(Debug, Clone, PartialEq)]
pub struct RelocationRequest {
    pub source: ObjectLocation,
    pub target: ObjectLocation,
}

impl RelocationRequest {
    pub fn new(source: ObjectLocation, target: ObjectLocation) -> Self {
        Self { source, target }
    }

    /// True when the move would overwrite and then delete its own source
    pub fn is_self_move(&self) -> bool {
        self.source == self.target
    }

    pub fn is_same_bucket(&self) -> bool {
        self.source.bucket == self.target.bucket
    }
}
