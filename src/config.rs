//! Command-line and environment configuration shared by the binaries.

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::{
    app::{AppConfig, StorageBackend},
    domain::models::{
        ingestion::{DEFAULT_SOURCE_BUCKET, DEFAULT_SOURCE_FOLDER, DEFAULT_TARGET_FOLDER},
        IngestionConfig, TextEncoding,
    },
};

/// Settings of the ingestion workflow
#[derive(Args, Debug, Clone)]
pub struct IngestionArgs {
    /// Bucket whose new objects are processed
    #[arg(long, env = "SOURCE_BUCKET", default_value = DEFAULT_SOURCE_BUCKET)]
    pub source_bucket: String,

    /// Folder objects must sit in directly to be processed
    #[arg(long, env = "SOURCE_FOLDER", default_value = DEFAULT_SOURCE_FOLDER)]
    pub source_folder: String,

    /// Folder processed objects are moved into
    #[arg(long, env = "TARGET_FOLDER", default_value = DEFAULT_TARGET_FOLDER)]
    pub target_folder: String,

    /// Encoding used to read object content
    #[arg(long, env = "TEXT_ENCODING", default_value = "utf-8")]
    pub text_encoding: TextEncoding,
}

impl IngestionArgs {
    pub fn to_ingestion_config(&self) -> IngestionConfig {
        IngestionConfig {
            source_bucket: self.source_bucket.clone(),
            source_folder: self.source_folder.clone(),
            target_folder: self.target_folder.clone(),
            encoding: self.text_encoding,
        }
    }
}

/// Settings of the storage backend
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// Storage backend type (memory, gcs, s3)
    #[arg(long, env = "STORAGE_BACKEND", default_value = "memory")]
    pub storage_backend: String,

    /// Path to a GCS service account key file
    #[arg(long, env = "GOOGLE_SERVICE_ACCOUNT")]
    pub gcs_service_account_path: Option<String>,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    /// S3 endpoint URL (for MinIO and other S3-compatible services)
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// S3 access key
    #[arg(long, env = "S3_ACCESS_KEY")]
    pub s3_access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "S3_SECRET_KEY")]
    pub s3_secret_key: Option<String>,

    /// Allow plain HTTP connections to the S3 endpoint
    #[arg(long, env = "S3_ALLOW_HTTP", default_value = "false")]
    pub s3_allow_http: bool,
}

impl StorageArgs {
    pub fn to_storage_backend(&self) -> Result<StorageBackend> {
        let backend = match self.storage_backend.to_lowercase().as_str() {
            "memory" => StorageBackend::InMemory,
            "gcs" | "gcp" => StorageBackend::Gcs {
                service_account_path: self.gcs_service_account_path.clone(),
            },
            "s3" | "minio" => StorageBackend::S3 {
                region: self.s3_region.clone(),
                endpoint: self.s3_endpoint.clone(),
                access_key: self.s3_access_key.clone(),
                secret_key: self.s3_secret_key.clone(),
                allow_http: self.s3_allow_http,
            },
            _ => bail!("Unknown storage backend: {}", self.storage_backend),
        };
        Ok(backend)
    }
}

/// Combine both argument groups into an application config
pub fn to_app_config(storage: &StorageArgs, ingestion: &IngestionArgs) -> Result<AppConfig> {
    let config = AppConfig {
        storage_backend: storage.to_storage_backend()?,
        ingestion: ingestion.to_ingestion_config(),
    };

    config
        .ingestion
        .validate()
        .context("Invalid ingestion configuration")?;

    Ok(config)
}

/// Log filter directive for a `--log-level` value
pub fn log_filter(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        storage: StorageArgs,

        #[command(flatten)]
        ingestion: IngestionArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test"]);
        let config = to_app_config(&cli.storage, &cli.ingestion).unwrap();

        assert!(matches!(config.storage_backend, StorageBackend::InMemory));
        assert_eq!(config.ingestion, IngestionConfig::default());
    }

    #[test]
    fn test_s3_backend() {
        let cli = TestCli::parse_from([
            "test",
            "--storage-backend",
            "s3",
            "--s3-endpoint",
            "http://localhost:9000",
            "--s3-allow-http",
            "--text-encoding",
            "latin-1",
        ]);
        let config = to_app_config(&cli.storage, &cli.ingestion).unwrap();

        match config.storage_backend {
            StorageBackend::S3 {
                endpoint,
                allow_http,
                ..
            } => {
                assert_eq!(endpoint.as_deref(), Some("http://localhost:9000"));
                assert!(allow_http);
            }
            other => panic!("Expected S3 backend, got {:?}", other),
        }
        assert_eq!(config.ingestion.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_unknown_backend() {
        let cli = TestCli::parse_from(["test", "--storage-backend", "ftp"]);
        assert!(to_app_config(&cli.storage, &cli.ingestion).is_err());
    }

    #[test]
    fn test_unknown_encoding_is_rejected_by_parser() {
        let result = TestCli::try_parse_from(["test", "--text-encoding", "utf-16"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter("DEBUG"), "debug");
        assert_eq!(log_filter("verbose"), "info");
    }
}
