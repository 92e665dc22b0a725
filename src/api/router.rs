use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Slack on top of the admission limit so an over-limit upload reaches the
/// guard and gets a proper PayloadTooLarge response instead of a transport
/// rejection.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    let body_limit = state.analysis.max_document_bytes() + BODY_LIMIT_SLACK;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
