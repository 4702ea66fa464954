pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use services::IngestionService;
pub use storage::BlobStore;
