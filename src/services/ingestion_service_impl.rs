use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::{
    domain::{
        errors::{StorageError, ValidationError},
        models::{
            non_empty_lines, IngestionConfig, IngestionOutcome, Notification, ObjectLocation,
            RelocationRequest, SkipReason,
        },
        value_objects::ObjectKey,
    },
    ports::{services::IngestionService, storage::BlobStore},
};

/// Number of content lines echoed to the log after a successful read
const SAMPLE_LINES: usize = 5;

/// Implementation of IngestionService: filter, read, split, relocate
#[derive(Clone)]
pub struct IngestionServiceImpl {
    store: Arc<dyn BlobStore>,
    config: IngestionConfig,
}

impl IngestionServiceImpl {
    /// Create a new IngestionServiceImpl instance
    pub fn new(store: Arc<dyn BlobStore>, config: IngestionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Exact-match qualification: bucket first, then folder
    fn qualify(&self, notification: &Notification) -> Result<(), SkipReason> {
        if notification.bucket_name != self.config.source_bucket {
            return Err(SkipReason::BucketMismatch {
                actual: notification.bucket_name.clone(),
            });
        }

        if notification.folder_path() != self.config.source_folder {
            return Err(SkipReason::FolderMismatch {
                actual: notification.folder_path().to_string(),
            });
        }

        Ok(())
    }

    /// Target keeps only the final path segment under the target folder
    fn target_location(
        &self,
        source: &ObjectLocation,
        file_name: &str,
    ) -> Result<ObjectLocation, ValidationError> {
        let key = ObjectKey::in_folder(&self.config.target_folder, file_name)?;
        Ok(ObjectLocation::new(source.bucket.clone(), key))
    }
}

#[async_trait]
impl IngestionService for IngestionServiceImpl {
    #[instrument(
        name = "ingest",
        skip_all,
        fields(
            bucket = %notification.bucket_name,
            object = %notification.object_name,
            content_type = ?notification.content_type,
            size = ?notification.size,
            time_created = ?notification.time_created
        )
    )]
    async fn process(&self, notification: &Notification) -> IngestionOutcome {
        info!(
            "Received event for object {}/{}",
            notification.bucket_name, notification.object_name
        );

        if let Err(reason) = self.qualify(notification) {
            match &reason {
                SkipReason::BucketMismatch { actual } => info!(
                    "Ignoring event for bucket '{}', expected '{}'",
                    actual, self.config.source_bucket
                ),
                SkipReason::FolderMismatch { actual } => info!(
                    "Ignoring event for folder '{}', expected '{}'",
                    actual, self.config.source_folder
                ),
            }
            return IngestionOutcome::Skipped(reason);
        }

        let source = match ObjectLocation::parse(
            &notification.bucket_name,
            &notification.object_name,
        ) {
            Ok(location) => location,
            Err(e) => {
                error!("Event names do not form a valid object location: {}", e);
                return IngestionOutcome::FetchFailed {
                    location: None,
                    error: StorageError::from(e),
                };
            }
        };

        info!("Processing {}", source);

        let content = match self.store.fetch_text(&source, self.config.encoding).await {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to read content of {}, stopping: {}", source, e);
                return IngestionOutcome::FetchFailed {
                    location: Some(source),
                    error: e,
                };
            }
        };

        info!("Read {} bytes of content", content.len());

        // Placeholder transform: the lines are logged, never written back
        let lines = non_empty_lines(&content);
        info!(
            "Content sample (first {} of {} lines): {:?}",
            SAMPLE_LINES.min(lines.len()),
            lines.len(),
            &lines[..SAMPLE_LINES.min(lines.len())]
        );

        let target = match self.target_location(&source, notification.file_name()) {
            Ok(target) => target,
            Err(e) => {
                error!("Cannot build relocation target for {}: {}", source, e);
                return IngestionOutcome::RelocationFailed {
                    target: None,
                    error: e.into(),
                };
            }
        };

        let request = RelocationRequest::new(source, target.clone());
        match self.store.move_object(&request).await {
            Ok(()) => {
                info!("Moved {} to {}", request.source, target);
                IngestionOutcome::Relocated {
                    target,
                    line_count: lines.len(),
                }
            }
            Err(e) => {
                if e.is_partial() {
                    warn!(
                        "Object {} now exists at both {} and {}",
                        request.source.key, request.source, target
                    );
                }
                error!("Failed to move {} to {}: {}", request.source, target, e);
                IngestionOutcome::RelocationFailed {
                    target: Some(target),
                    error: e,
                }
            }
        }
    }
}
