use crate::domain::{
    errors::{MoveError, StorageResult},
    models::{ObjectLocation, RelocationRequest, TextEncoding},
};
use async_trait::async_trait;

/// Port for the storage operations the ingestion workflow needs.
/// This abstracts the actual storage backend (GCS, S3, in-memory, ...).
///
/// Callers always pass fully-resolved locations; implementations carry no
/// per-instance bucket or object defaults.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    /// Read the whole object and decode it as text.
    ///
    /// A single attempt is made. Any failure (missing object, decode error,
    /// transport fault) is returned as-is.
    async fn fetch_text(
        &self,
        location: &ObjectLocation,
        encoding: TextEncoding,
    ) -> StorageResult<String>;

    /// Copy `request.source` to `request.target`, then delete the source.
    ///
    /// The two steps are not atomic: [`MoveError::DeleteFailed`] reports that
    /// the copy succeeded but the source is still present. A self-move fails
    /// with [`MoveError::SameLocation`] before any remote call.
    async fn move_object(&self, request: &RelocationRequest) -> Result<(), MoveError>;
}
