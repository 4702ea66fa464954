// Infrastructure error mapping
mod error;

// Storage implementations
pub mod connector;
pub mod object_store_adapter;

// Re-export key types
pub use connector::{BucketConnector, GcsConnector, InMemoryConnector, S3Connector};
pub use object_store_adapter::ObjectStoreAdapter;
