//! Document upload endpoint handler

use axum::extract::{Multipart, State};
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{ExtractedText, RawDocument};

/// POST /v1/documents/extract
///
/// Accepts a multipart upload with a `file` field and returns the extracted
/// plain text. The admission check runs on the declared content type (with
/// a filename-based guess as fallback) before any decoding happens.
pub async fn extract_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedText>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();

        let declared_media_type = field
            .content_type()
            .map(str::to_string)
            .or_else(|| {
                mime_guess::from_path(&original_name)
                    .first_raw()
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        info!(
            request_id = %request_id,
            name = %original_name,
            media_type = %declared_media_type,
            bytes = bytes.len(),
            "Processing document upload"
        );

        let document = RawDocument::new(bytes, declared_media_type, original_name);
        let extracted = state.analysis.extract(document).await?;

        return Ok(Json(extracted));
    }

    Err(ApiError::bad_request("Missing 'file' field in multipart body").with_param("file"))
}
