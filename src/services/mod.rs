mod ingestion_service_impl;

pub use ingestion_service_impl::IngestionServiceImpl;
