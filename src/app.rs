use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{
        BucketConnector, GcsConnector, InMemoryConnector, ObjectStoreAdapter, S3Connector,
    },
    domain::models::IngestionConfig,
    ports::storage::BlobStore,
    services::IngestionServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub ingestion: IngestionConfig,
}

/// Storage backend configuration
#[derive(Debug, Clone, Default)]
pub enum StorageBackend {
    #[default]
    InMemory,
    Gcs {
        service_account_path: Option<String>,
    },
    S3 {
        region: String,
        endpoint: Option<String>,
        access_key: Option<String>,
        secret_key: Option<String>,
        allow_http: bool,
    },
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::InMemory => "memory",
            StorageBackend::Gcs { .. } => "gcs",
            StorageBackend::S3 { .. } => "s3",
        }
    }
}

/// Application dependencies container
pub struct AppDependencies {
    pub blob_store: Arc<dyn BlobStore>,
}

/// Application services container
pub struct AppServices {
    pub ingestion_service: IngestionServiceImpl,
    pub blob_store: Arc<dyn BlobStore>,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    connector: Option<Arc<dyn BucketConnector>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            connector: None,
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Configure the ingestion workflow
    pub fn with_ingestion_config(mut self, ingestion: IngestionConfig) -> Self {
        self.config.ingestion = ingestion;
        self
    }

    /// Use an existing connector instead of building one from the backend
    pub fn with_connector(mut self, connector: Arc<dyn BucketConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Build the application dependencies
    pub fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        let connector = match &self.connector {
            Some(connector) => connector.clone(),
            None => self.create_connector(),
        };

        Ok(AppDependencies {
            blob_store: Arc::new(ObjectStoreAdapter::new(connector)),
        })
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        self.config
            .ingestion
            .validate()
            .map_err(|e| AppError::Configuration {
                message: e.to_string(),
            })?;

        let deps = self.build_dependencies()?;

        let ingestion_service =
            IngestionServiceImpl::new(deps.blob_store.clone(), self.config.ingestion);

        Ok(AppServices {
            ingestion_service,
            blob_store: deps.blob_store,
        })
    }

    /// Create the bucket connector for the configured backend
    fn create_connector(&self) -> Arc<dyn BucketConnector> {
        match &self.config.storage_backend {
            StorageBackend::InMemory => Arc::new(InMemoryConnector::new()),
            StorageBackend::Gcs {
                service_account_path,
            } => Arc::new(GcsConnector {
                service_account_path: service_account_path.clone(),
            }),
            StorageBackend::S3 {
                region,
                endpoint,
                access_key,
                secret_key,
                allow_http,
            } => Arc::new(S3Connector {
                region: region.clone(),
                endpoint: endpoint.clone(),
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
                allow_http: *allow_http,
            }),
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Create an in-memory application for testing and development
pub fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .build()
}
