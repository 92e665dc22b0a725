//! Analysis endpoint handlers

use axum::extract::State;
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{AnalyzeRequest, ApiError, BulkAnalyzeRequest, Json};
use crate::domain::StructuredResult;
use crate::infrastructure::services::BulkAnalysis;

/// POST /v1/analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<StructuredResult>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        directive = %request.directive,
        chars = request.text.len(),
        "Processing analysis request"
    );

    let result = state
        .analysis
        .analyze(request.directive, &request.text)
        .await?;

    info!(
        request_id = %request_id,
        items = result.item_count(),
        fallback = result.is_fallback(),
        "Analysis completed"
    );

    Ok(Json(result))
}

/// POST /v1/analyze/bulk
pub async fn analyze_bulk(
    State(state): State<AppState>,
    Json(request): Json<BulkAnalyzeRequest>,
) -> Result<Json<BulkAnalysis>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        chars = request.text.len(),
        "Processing bulk analysis request"
    );

    let analysis = state.analysis.analyze_bulk(&request.text).await?;

    info!(
        request_id = %request_id,
        summary_items = analysis.summary.item_count(),
        concept_items = analysis.concepts.item_count(),
        question_items = analysis.questions.item_count(),
        gap_items = analysis.gaps.item_count(),
        "Bulk analysis completed"
    );

    Ok(Json(analysis))
}
