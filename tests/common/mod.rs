#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use data_ingestion::{
    BlobStore, BucketConnector, BucketName, MoveError, ObjectLocation, RelocationRequest,
    StorageError, StorageResult, TextEncoding,
};
use futures::stream::BoxStream;
use object_store::{
    memory::InMemory, path::Path, GetOptions, GetResult, ListResult, MultipartUpload, ObjectMeta,
    ObjectStore, PutMultipartOpts, PutOptions, PutPayload, PutResult,
};
use std::{
    collections::HashMap,
    ops::Range,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

pub const BUCKET: &str = "supply-chain-compensation-analysis-with-nlp";

pub fn location(bucket: &str, key: &str) -> ObjectLocation {
    ObjectLocation::parse(bucket, key).unwrap()
}

/// BlobStore fake that keeps text in a map and records every call
#[derive(Default)]
pub struct RecordingBlobStore {
    objects: Mutex<HashMap<ObjectLocation, String>>,
    fetch_calls: Mutex<Vec<ObjectLocation>>,
    move_calls: Mutex<Vec<RelocationRequest>>,
    fail_delete: AtomicBool,
}

impl RecordingBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, bucket: &str, key: &str, content: &str) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert(location(bucket, key), content.to_string());
        self
    }

    /// Make the delete half of every move fail
    pub fn failing_delete(self) -> Self {
        self.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .lock()
            .unwrap()
            .contains_key(&location(bucket, key))
    }

    pub fn fetch_calls(&self) -> Vec<ObjectLocation> {
        self.fetch_calls.lock().unwrap().clone()
    }

    pub fn move_calls(&self) -> Vec<RelocationRequest> {
        self.move_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.fetch_calls().len() + self.move_calls().len()
    }
}

#[async_trait]
impl BlobStore for RecordingBlobStore {
    async fn fetch_text(
        &self,
        location: &ObjectLocation,
        _encoding: TextEncoding,
    ) -> StorageResult<String> {
        self.fetch_calls.lock().unwrap().push(location.clone());

        self.objects
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound {
                location: location.clone(),
            })
    }

    async fn move_object(&self, request: &RelocationRequest) -> Result<(), MoveError> {
        self.move_calls.lock().unwrap().push(request.clone());

        if request.is_self_move() {
            return Err(MoveError::SameLocation {
                location: request.source.clone(),
            });
        }

        let mut objects = self.objects.lock().unwrap();
        let content = objects
            .get(&request.source)
            .cloned()
            .ok_or_else(|| MoveError::CopyFailed {
                source: StorageError::ObjectNotFound {
                    location: request.source.clone(),
                },
            })?;
        objects.insert(request.target.clone(), content);

        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(MoveError::DeleteFailed {
                source: StorageError::InfrastructureError {
                    message: "delete rejected".to_string(),
                    detail: None,
                },
            });
        }

        objects.remove(&request.source);
        Ok(())
    }
}

/// object_store wrapper whose deletes always fail, and which counts calls
#[derive(Debug)]
pub struct FailingDeleteStore {
    inner: InMemory,
    calls: Mutex<Vec<&'static str>>,
}

impl FailingDeleteStore {
    pub fn new() -> Self {
        Self {
            inner: InMemory::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl std::fmt::Display for FailingDeleteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FailingDeleteStore")
    }
}

#[async_trait]
impl ObjectStore for FailingDeleteStore {
    async fn put_opts(
        &self,
        location: &Path,
        payload: PutPayload,
        opts: PutOptions,
    ) -> object_store::Result<PutResult> {
        self.record("put");
        self.inner.put_opts(location, payload, opts).await
    }

    async fn put_multipart_opts(
        &self,
        location: &Path,
        opts: PutMultipartOpts,
    ) -> object_store::Result<Box<dyn MultipartUpload>> {
        self.record("put_multipart");
        self.inner.put_multipart_opts(location, opts).await
    }

    async fn get_opts(
        &self,
        location: &Path,
        options: GetOptions,
    ) -> object_store::Result<GetResult> {
        self.record("get");
        self.inner.get_opts(location, options).await
    }

    async fn get_range(&self, location: &Path, range: Range<u64>) -> object_store::Result<Bytes> {
        self.record("get_range");
        self.inner.get_range(location, range).await
    }

    async fn head(&self, location: &Path) -> object_store::Result<ObjectMeta> {
        self.record("head");
        self.inner.head(location).await
    }

    async fn delete(&self, _location: &Path) -> object_store::Result<()> {
        self.record("delete");
        Err(object_store::Error::Generic {
            store: "failing-delete",
            source: "delete rejected".into(),
        })
    }

    fn list(&self, prefix: Option<&Path>) -> BoxStream<'static, object_store::Result<ObjectMeta>> {
        self.inner.list(prefix)
    }

    async fn list_with_delimiter(&self, prefix: Option<&Path>) -> object_store::Result<ListResult> {
        self.inner.list_with_delimiter(prefix).await
    }

    async fn copy(&self, from: &Path, to: &Path) -> object_store::Result<()> {
        self.record("copy");
        self.inner.copy(from, to).await
    }

    async fn copy_if_not_exists(&self, from: &Path, to: &Path) -> object_store::Result<()> {
        self.record("copy");
        self.inner.copy_if_not_exists(from, to).await
    }
}

/// Connector that hands out the same store for every bucket
pub struct FixedConnector(pub Arc<dyn ObjectStore>);

impl BucketConnector for FixedConnector {
    fn scheme(&self) -> &'static str {
        "test"
    }

    fn connect(&self, _bucket: &BucketName) -> StorageResult<Arc<dyn ObjectStore>> {
        Ok(self.0.clone())
    }
}
