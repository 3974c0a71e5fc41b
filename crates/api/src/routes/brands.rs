//! Route definitions for brand management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::brands;
use crate::state::AppState;

/// Brand routes mounted under `/api/v1`.
///
/// ```text
/// GET    /brands               -> list_brands
/// POST   /brands               -> create_brand
/// GET    /brands/current       -> current_brand
/// GET    /brands/{id}          -> get_brand
/// PUT    /brands/{id}          -> update_brand
/// DELETE /brands/{id}          -> delete_brand
/// POST   /brands/{id}/select   -> select_brand
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(brands::list_brands).post(brands::create_brand))
        .route("/brands/current", get(brands::current_brand))
        .route(
            "/brands/{id}",
            get(brands::get_brand)
                .put(brands::update_brand)
                .delete(brands::delete_brand),
        )
        .route("/brands/{id}/select", post(brands::select_brand))
}
