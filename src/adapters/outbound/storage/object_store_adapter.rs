use async_trait::async_trait;
use futures::StreamExt;
use object_store::{path::Path as ObjectPath, PutPayload};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::{connector::BucketConnector, error::from_store_error};
use crate::{
    domain::{
        errors::{MoveError, StorageError, StorageResult, ValidationError},
        models::{ObjectLocation, RelocationRequest, TextEncoding},
    },
    ports::storage::BlobStore,
};

/// Storage path for a location, refusing keys that object_store would store
/// under a different name (trailing `/`, control characters, `.` segments).
pub(crate) fn object_path(location: &ObjectLocation) -> StorageResult<ObjectPath> {
    let key = location.key.as_str();
    let unaddressable = |reason: String| {
        StorageError::from(ValidationError::UnaddressableObjectKey {
            key: key.to_string(),
            reason,
        })
    };

    let path = ObjectPath::parse(key).map_err(|e| unaddressable(e.to_string()))?;
    if path.as_ref() != key {
        return Err(unaddressable(format!("would be stored as {:?}", path.as_ref())));
    }

    Ok(path)
}

/// Adapter that implements our BlobStore port on top of `object_store`
pub struct ObjectStoreAdapter {
    connector: Arc<dyn BucketConnector>,
}

impl ObjectStoreAdapter {
    pub fn new(connector: Arc<dyn BucketConnector>) -> Self {
        Self { connector }
    }

    fn url(&self, location: &ObjectLocation) -> String {
        format!("{}://{}", self.connector.scheme(), location)
    }

    async fn read_bytes(&self, location: &ObjectLocation) -> StorageResult<Vec<u8>> {
        let path = object_path(location)?;
        let store = self.connector.connect(&location.bucket)?;

        let result = store
            .get(&path)
            .await
            .map_err(|e| from_store_error(e, location, "read"))?;

        let mut stream = result.into_stream();
        let mut data = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| from_store_error(e, location, "read"))?;
            data.extend_from_slice(&chunk);
        }

        Ok(data)
    }

    async fn copy(&self, request: &RelocationRequest) -> StorageResult<()> {
        let source_path = object_path(&request.source)?;
        let target_path = object_path(&request.target)?;

        if request.is_same_bucket() {
            let store = self.connector.connect(&request.source.bucket)?;
            return store
                .copy(&source_path, &target_path)
                .await
                .map_err(|e| from_store_error(e, &request.source, "copy"));
        }

        // No server-side copy between buckets: read, then write
        let source_store = self.connector.connect(&request.source.bucket)?;
        let target_store = self.connector.connect(&request.target.bucket)?;

        let bytes = source_store
            .get(&source_path)
            .await
            .map_err(|e| from_store_error(e, &request.source, "read"))?
            .bytes()
            .await
            .map_err(|e| from_store_error(e, &request.source, "read"))?;

        target_store
            .put(&target_path, PutPayload::from(bytes))
            .await
            .map_err(|e| from_store_error(e, &request.target, "write"))?;

        Ok(())
    }

    async fn delete(&self, location: &ObjectLocation) -> StorageResult<()> {
        let path = object_path(location)?;
        let store = self.connector.connect(&location.bucket)?;
        store
            .delete(&path)
            .await
            .map_err(|e| from_store_error(e, location, "delete"))
    }
}

#[async_trait]
impl BlobStore for ObjectStoreAdapter {
    async fn fetch_text(
        &self,
        location: &ObjectLocation,
        encoding: TextEncoding,
    ) -> StorageResult<String> {
        debug!("Reading {} as {}", self.url(location), encoding);

        let result = self.read_bytes(location).await.and_then(|bytes| {
            encoding
                .decode(bytes)
                .map_err(|message| StorageError::DecodeError {
                    location: location.clone(),
                    encoding,
                    message,
                })
        });

        match &result {
            Ok(_) => info!("Read content of {}", self.url(location)),
            Err(e) => error!("Failed to read content of {}: {}", self.url(location), e),
        }

        result
    }

    async fn move_object(&self, request: &RelocationRequest) -> Result<(), MoveError> {
        if request.is_self_move() {
            warn!(
                "Source and target are both {}, nothing moved",
                self.url(&request.source)
            );
            return Err(MoveError::SameLocation {
                location: request.source.clone(),
            });
        }

        info!(
            "Moving {} to {}",
            self.url(&request.source),
            self.url(&request.target)
        );

        if let Err(source) = self.copy(request).await {
            error!("Copy failed: {}", source);
            return Err(MoveError::CopyFailed { source });
        }
        debug!("Copy to {} completed", self.url(&request.target));

        if let Err(source) = self.delete(&request.source).await {
            error!(
                "Delete of {} failed after copy: {}",
                self.url(&request.source),
                source
            );
            return Err(MoveError::DeleteFailed { source });
        }

        info!("Move successful (copied and deleted)");
        Ok(())
    }
}
