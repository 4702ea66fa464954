use crate::domain::models::{IngestionOutcome, Notification};
use async_trait::async_trait;

/// Port for the object-ingestion workflow
#[async_trait]
pub trait IngestionService: Send + Sync + 'static {
    /// Handle one object-creation notification.
    ///
    /// Never fails: every problem is logged and reported through the returned
    /// outcome, so the trigger always sees a normal completion.
    async fn process(&self, notification: &Notification) -> IngestionOutcome;
}
