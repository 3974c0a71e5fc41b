pub mod brands;
pub mod extraction;
pub mod health;
pub mod themes;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                       WebSocket (theme propagation channel)
///
/// /brands                   list, create
/// /brands/current           the selected brand
/// /brands/{id}              get, update, delete
/// /brands/{id}/select       make this brand current (POST)
///
/// /theme                    active theme: get, replace, patch
/// /theme/css                active theme as CSS custom properties
/// /theme/save               commit active theme to the brand (POST)
/// /theme/synthesize         full theme from three colors (POST)
/// /theme/highlight          highlight a preview element (POST)
///
/// /extract                  run theme extraction for a URL (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(brands::router())
        .merge(themes::router())
        .merge(extraction::router())
}
