//! Route definitions for the active theme.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::themes;
use crate::state::AppState;

/// Theme routes mounted under `/api/v1`.
///
/// ```text
/// GET   /theme              -> get_active_theme
/// PUT   /theme              -> replace_active_theme
/// PATCH /theme              -> patch_active_theme
/// GET   /theme/css          -> active_theme_css
/// POST  /theme/save         -> save_active_theme
/// POST  /theme/synthesize   -> synthesize_theme
/// POST  /theme/highlight    -> highlight_element
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/theme",
            get(themes::get_active_theme)
                .put(themes::replace_active_theme)
                .patch(themes::patch_active_theme),
        )
        .route("/theme/css", get(themes::active_theme_css))
        .route("/theme/save", post(themes::save_active_theme))
        .route("/theme/synthesize", post(themes::synthesize_theme))
        .route("/theme/highlight", post(themes::highlight_element))
}
