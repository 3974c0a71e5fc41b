//! Handler for theme extraction requests.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for an extraction run.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Website to extract a theme from; scheme optional.
    pub url: String,
}

/// POST /api/v1/extract
///
/// Run the extraction pipeline for a URL. The pipeline itself is total:
/// bad URLs come back as `success: false` inside the payload, and fetch
/// failures degrade to domain-pattern fallbacks. The result is a
/// suggestion only; nothing is activated until the client applies it.
pub async fn extract_theme(
    State(state): State<AppState>,
    Json(input): Json<ExtractRequest>,
) -> AppResult<impl IntoResponse> {
    if input.url.trim().is_empty() {
        return Err(AppError::BadRequest("url must not be empty".to_string()));
    }

    tracing::info!(url = %input.url, "Extraction requested");
    let result = state.extractor.extract(&input.url).await;
    Ok(Json(DataResponse { data: result }))
}
