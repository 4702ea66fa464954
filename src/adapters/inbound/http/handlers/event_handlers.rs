use axum::{body::Bytes, extract::State, Json};
use http::{HeaderMap, StatusCode};
use tracing::{debug, info, info_span, Instrument};

use crate::{
    adapters::inbound::http::{
        dto::{CloudEventDto, HealthResponseDto},
        router::AppState,
    },
    domain::models::Notification,
};

/// Handle an object-creation CloudEvent.
///
/// Always answers `200 OK` once the workflow has returned: skips, read
/// failures and move failures are reported through logs only.
pub async fn receive_event(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let event = CloudEventDto::from_http(&headers, &body);

    let event_id = event
        .id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let span = info_span!(
        "event",
        id = %event_id,
        event_type = event.event_type.as_deref().unwrap_or("-"),
    );

    async move {
        info!("Event received");
        if let Some(subject) = &event.subject {
            debug!("Event subject: {}", subject);
        }

        let notification = Notification::from_event_data(&event.data);
        let outcome = app_state.ingestion_service.process(&notification).await;

        debug!(?outcome, "Workflow finished");
        info!("Event handled");
    }
    .instrument(span)
    .await;

    StatusCode::OK
}

/// Liveness probe
pub async fn health() -> Json<HealthResponseDto> {
    Json(HealthResponseDto::ok())
}
