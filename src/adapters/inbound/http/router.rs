use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{health, receive_event};
use crate::ports::services::IngestionService;

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<dyn IngestionService>,
}

/// Create the event receiver router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // CloudEvents are delivered to the root path
        .route("/", post(receive_event))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
