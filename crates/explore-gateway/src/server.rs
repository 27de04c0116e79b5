//! Router assembly: SSE conversation/card endpoints, health probes, CORS.

use crate::handlers::{cards, conversation, health};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/conversation/stream", post(conversation::stream_conversation))
        .route("/v1/cards", post(cards::generate_cards))
        .route("/health/alive", get(health::alive))
        .route("/health/available", get(health::available))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
