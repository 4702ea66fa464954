use crate::domain::{
    errors::{MoveError, StorageError, ValidationError},
    models::{ObjectLocation, TextEncoding},
    value_objects::BucketName,
};

pub const DEFAULT_SOURCE_BUCKET: &str = "supply-chain-compensation-analysis-with-nlp";
pub const DEFAULT_SOURCE_FOLDER: &str = "raw_data";
pub const DEFAULT_TARGET_FOLDER: &str = "processed_data";

/// Deployment-time settings for the ingestion workflow
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionConfig {
    /// Exact bucket name accepted by the bucket filter
    pub source_bucket: String,
    /// Exact folder path accepted by the folder filter
    pub source_folder: String,
    /// Folder that qualifying objects are moved into, in the same bucket
    pub target_folder: String,
    pub encoding: TextEncoding,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source_bucket: DEFAULT_SOURCE_BUCKET.to_string(),
            source_folder: DEFAULT_SOURCE_FOLDER.to_string(),
            target_folder: DEFAULT_TARGET_FOLDER.to_string(),
            encoding: TextEncoding::default(),
        }
    }
}

impl IngestionConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        BucketName::new(self.source_bucket.as_str())?;

        if self.target_folder.is_empty()
            || self.target_folder.starts_with('/')
            || self.target_folder.ends_with('/')
        {
            return Err(ValidationError::InvalidField {
                field: "target_folder".to_string(),
                value: self.target_folder.clone(),
                expected: "a non-empty folder path without leading or trailing '/'".to_string(),
            });
        }

        if self.source_folder == self.target_folder {
            return Err(ValidationError::InvalidField {
                field: "target_folder".to_string(),
                value: self.target_folder.clone(),
                expected: "a folder different from source_folder".to_string(),
            });
        }

        Ok(())
    }
}

/// Why a notification did not qualify for processing
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    BucketMismatch { actual: String },
    FolderMismatch { actual: String },
}

/// What a single workflow run did
#[derive(Debug, Clone)]
pub enum IngestionOutcome {
    /// The notification did not pass the qualification filters
    Skipped(SkipReason),
    /// The content could not be read; nothing was relocated
    FetchFailed {
        location: Option<ObjectLocation>,
        error: StorageError,
    },
    /// The object was copied to `target` and its source removed
    Relocated {
        target: ObjectLocation,
        line_count: usize,
    },
    /// The relocation failed; see [`MoveError::is_partial`]
    RelocationFailed {
        target: Option<ObjectLocation>,
        error: MoveError,
    },
}

impl IngestionOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, IngestionOutcome::Skipped(_))
    }

    pub fn is_relocated(&self) -> bool {
        matches!(self, IngestionOutcome::Relocated { .. })
    }
}
