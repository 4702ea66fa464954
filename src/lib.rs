pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - notification, relocation and outcome models
pub use domain::{
    BucketName,
    IngestionConfig,
    IngestionOutcome,
    // Errors
    MoveError,
    // Models
    Notification,
    ObjectKey,
    ObjectLocation,
    RelocationRequest,
    SkipReason,
    StorageError,
    StorageResult,
    TextEncoding,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{BlobStore, IngestionService};

// Service implementations - business logic
pub use services::IngestionServiceImpl;

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, StorageBackend,
    create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{
    BucketConnector, GcsConnector, InMemoryConnector, ObjectStoreAdapter, S3Connector,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, BlobStore, IngestionConfig, IngestionOutcome, IngestionService,
        IngestionServiceImpl, Notification, ObjectLocation, ObjectStoreAdapter,
        RelocationRequest, create_in_memory_app,
    };
}
