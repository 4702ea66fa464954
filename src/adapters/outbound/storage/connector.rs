use object_store::{
    aws::AmazonS3Builder, gcp::GoogleCloudStorageBuilder, memory::InMemory,
    ObjectStore as ObjectStoreBackend, PutPayload,
};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use super::{
    error::{from_connect_error, from_store_error},
    object_store_adapter::object_path,
};
use crate::domain::{
    errors::{StorageError, StorageResult},
    models::ObjectLocation,
    value_objects::BucketName,
};

/// Resolves a bucket name into a handle on the storage service
pub trait BucketConnector: Send + Sync + 'static {
    /// URL scheme used when logging locations (`gs`, `s3`, `memory`)
    fn scheme(&self) -> &'static str;

    fn connect(&self, bucket: &BucketName) -> StorageResult<Arc<dyn ObjectStoreBackend>>;
}

/// Process-local buckets, created on first use
#[derive(Debug, Default)]
pub struct InMemoryConnector {
    buckets: RwLock<HashMap<BucketName, Arc<InMemory>>>,
}

impl InMemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an object directly, bypassing the workflow
    pub async fn seed(&self, location: &ObjectLocation, data: Vec<u8>) -> StorageResult<()> {
        let path = object_path(location)?;
        let store = self.connect(&location.bucket)?;
        store
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| from_store_error(e, location, "seed"))?;
        Ok(())
    }

    fn lock_error(bucket: &BucketName) -> StorageError {
        StorageError::BucketUnavailable {
            bucket: bucket.clone(),
            message: "in-memory bucket registry lock poisoned".to_string(),
        }
    }
}

impl BucketConnector for InMemoryConnector {
    fn scheme(&self) -> &'static str {
        "memory"
    }

    fn connect(&self, bucket: &BucketName) -> StorageResult<Arc<dyn ObjectStoreBackend>> {
        {
            let buckets = self.buckets.read().map_err(|_| Self::lock_error(bucket))?;
            if let Some(store) = buckets.get(bucket) {
                return Ok(store.clone());
            }
        }

        let mut buckets = self.buckets.write().map_err(|_| Self::lock_error(bucket))?;
        let store = buckets
            .entry(bucket.clone())
            .or_insert_with(|| Arc::new(InMemory::new()))
            .clone();
        Ok(store)
    }
}

/// Google Cloud Storage, credentials taken from the environment
#[derive(Debug, Clone, Default)]
pub struct GcsConnector {
    pub service_account_path: Option<String>,
}

impl BucketConnector for GcsConnector {
    fn scheme(&self) -> &'static str {
        "gs"
    }

    fn connect(&self, bucket: &BucketName) -> StorageResult<Arc<dyn ObjectStoreBackend>> {
        let mut builder = GoogleCloudStorageBuilder::from_env().with_bucket_name(bucket.as_str());

        if let Some(path) = &self.service_account_path {
            builder = builder.with_service_account_path(path);
        }

        let store = builder.build().map_err(|e| from_connect_error(e, bucket))?;
        Ok(Arc::new(store))
    }
}

/// Configuration for S3-compatible storage (AWS, MinIO, ...)
#[derive(Debug, Clone)]
pub struct S3Connector {
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub allow_http: bool,
}

impl BucketConnector for S3Connector {
    fn scheme(&self) -> &'static str {
        "s3"
    }

    fn connect(&self, bucket: &BucketName) -> StorageResult<Arc<dyn ObjectStoreBackend>> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(bucket.as_str())
            .with_region(&self.region)
            .with_allow_http(self.allow_http);

        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint);
        }

        if let Some(access_key) = &self.access_key {
            builder = builder.with_access_key_id(access_key);
        }

        if let Some(secret_key) = &self.secret_key {
            builder = builder.with_secret_access_key(secret_key);
        }

        let store = builder.build().map_err(|e| from_connect_error(e, bucket))?;
        Ok(Arc::new(store))
    }
}
