use chrono::{DateTime, Utc};
use serde_json::Value;

/// An object-creation notification delivered by the storage service.
///
/// Only `bucket` and `name` drive the workflow; the remaining fields are
/// carried for logging. Missing or non-string fields default to empty, which
/// never matches a configured source bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    pub bucket_name: String,
    pub object_name: String,
    pub content_type: Option<String>,
    pub size: Option<u64>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn new(bucket_name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            object_name: object_name.into(),
            ..Default::default()
        }
    }

    /// Build a notification from the storage object payload
    /// (`{"bucket": "...", "name": "...", ...}`).
    pub fn from_event_data(data: &Value) -> Self {
        let string_field = |name: &str| {
            data.get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        // GCS encodes the object size as a decimal string
        let size = data.get("size").and_then(|v| match v {
            Value::String(s) => s.parse().ok(),
            other => other.as_u64(),
        });

        let time_created = string_field("timeCreated")
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|t| t.with_timezone(&Utc));

        Self {
            bucket_name: string_field("bucket").unwrap_or_default(),
            object_name: string_field("name").unwrap_or_default(),
            content_type: string_field("contentType"),
            size,
            time_created,
        }
    }

    /// Everything before the last `/` of the object name, or `""`
    pub fn folder_path(&self) -> &str {
        self.split_object_name().0
    }

    /// Everything after the last `/` of the object name
    pub fn file_name(&self) -> &str {
        self.split_object_name().1
    }

    fn split_object_name(&self) -> (&str, &str) {
        self.object_name
            .rsplit_once('/')
            .unwrap_or(("", &self.object_name))
    }
}
