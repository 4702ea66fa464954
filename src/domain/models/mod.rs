pub mod content;
pub mod ingestion;
pub mod notification;
pub mod relocation;

pub use content::{TextEncoding, non_empty_lines};
pub use ingestion::{IngestionConfig, IngestionOutcome, SkipReason};
pub use notification::Notification;
pub use relocation::{ObjectLocation, RelocationRequest};
