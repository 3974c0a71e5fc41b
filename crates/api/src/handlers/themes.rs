//! Handlers for the active theme and the preview highlight control.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use oddsmith_core::theme::{css, OperatorTheme, SimpleThemeColors, ThemePatch};
use oddsmith_events::ThemeEvent;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/theme
pub async fn get_active_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let theme = state.store.active_theme().await;
    Ok(Json(DataResponse { data: theme }))
}

/// PUT /api/v1/theme
///
/// Replace the active theme wholesale and propagate it.
pub async fn replace_active_theme(
    State(state): State<AppState>,
    Json(theme): Json<OperatorTheme>,
) -> AppResult<impl IntoResponse> {
    let theme = state.store.set_active_theme(theme).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// PATCH /api/v1/theme
///
/// Apply a partial update (one level deep per group) and propagate.
pub async fn patch_active_theme(
    State(state): State<AppState>,
    Json(patch): Json<ThemePatch>,
) -> AppResult<impl IntoResponse> {
    if patch.is_empty() {
        return Err(AppError::BadRequest("Empty theme patch".to_string()));
    }
    let theme = state.store.patch_active_theme(patch).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// GET /api/v1/theme/css
///
/// The active theme rendered as `--theme-*` custom properties, the same
/// map a preview applies on THEME_UPDATE.
pub async fn active_theme_css(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let theme = state.store.active_theme().await;
    let vars: BTreeMap<String, String> = css::custom_properties(&theme);
    Ok(Json(DataResponse { data: vars }))
}

/// POST /api/v1/theme/save
///
/// Commit the active theme onto the current brand.
pub async fn save_active_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brand = state.store.save_active_to_brand().await?;
    Ok(Json(DataResponse { data: brand }))
}

/// POST /api/v1/theme/synthesize
///
/// Build a complete theme from three colors, activate and propagate it.
pub async fn synthesize_theme(
    State(state): State<AppState>,
    Json(colors): Json<SimpleThemeColors>,
) -> AppResult<impl IntoResponse> {
    let theme = state.store.apply_simple_colors(colors).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// Request body for the highlight control.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRequest {
    /// Element kind to highlight; `null` clears all highlighting.
    pub element_type: Option<String>,
}

/// POST /api/v1/theme/highlight
///
/// Publish a HIGHLIGHT_ELEMENT event to all previews.
pub async fn highlight_element(
    State(state): State<AppState>,
    Json(input): Json<HighlightRequest>,
) -> AppResult<impl IntoResponse> {
    state.bus.publish(ThemeEvent::HighlightElement {
        element_type: input.element_type.clone(),
    });
    Ok(Json(DataResponse {
        data: serde_json::json!({ "highlighted": input.element_type }),
    }))
}
