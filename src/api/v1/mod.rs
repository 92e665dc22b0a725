//! v1 API endpoints

pub mod analyze;
pub mod documents;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze::analyze))
        .route("/analyze/bulk", post(analyze::analyze_bulk))
        .route("/documents/extract", post(documents::extract_document))
}
