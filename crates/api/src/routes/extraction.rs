//! Route definitions for theme extraction.

use axum::routing::post;
use axum::Router;

use crate::handlers::extraction;
use crate::state::AppState;

/// Extraction routes mounted under `/api/v1`.
///
/// ```text
/// POST /extract   -> extract_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/extract", post(extraction::extract_theme))
}
