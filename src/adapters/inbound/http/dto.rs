use http::{header::CONTENT_TYPE, HeaderMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";

/// A CloudEvent as received over HTTP, in either binary or structured mode.
///
/// Binary mode carries the attributes in `ce-*` headers and the payload as
/// the body. Structured mode carries everything in a JSON envelope with the
/// payload under `data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudEventDto {
    pub id: Option<String>,
    pub event_type: Option<String>,
    pub source: Option<String>,
    pub subject: Option<String>,
    pub data: Value,
}

impl CloudEventDto {
    /// Decode an HTTP request. Bodies that are not JSON yield `Value::Null`
    /// data, which later degrades to an empty notification.
    pub fn from_http(headers: &HeaderMap, body: &[u8]) -> Self {
        let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let structured = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with(STRUCTURED_CONTENT_TYPE))
            || (!headers.contains_key("ce-specversion") && body.get("specversion").is_some());

        if structured {
            // Non-string attributes are dropped one by one, `data` is kept
            let attribute = |name: &str| {
                body.get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            };

            return Self {
                id: attribute("id"),
                event_type: attribute("type"),
                source: attribute("source"),
                subject: attribute("subject"),
                data: body.get("data").cloned().unwrap_or_default(),
            };
        }

        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        Self {
            id: header("ce-id"),
            event_type: header("ce-type"),
            source: header("ce-source"),
            subject: header("ce-subject"),
            data: body,
        }
    }
}

/// DTO for the health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
}

impl HealthResponseDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
