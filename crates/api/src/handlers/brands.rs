//! Handlers for brand management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use oddsmith_core::brand::{CreateBrand, UpdateBrand};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = state.store.list_brands().await;
    Ok(Json(DataResponse { data: brands }))
}

/// POST /api/v1/brands
///
/// Create a brand with a fresh default theme.
pub async fn create_brand(
    State(state): State<AppState>,
    Json(input): Json<CreateBrand>,
) -> AppResult<impl IntoResponse> {
    let brand = state.store.create_brand(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: brand })))
}

/// GET /api/v1/brands/current
pub async fn current_brand(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brand = state.store.current_brand().await;
    Ok(Json(DataResponse { data: brand }))
}

/// GET /api/v1/brands/{id}
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let brand = state.store.get_brand(&id).await?;
    Ok(Json(DataResponse { data: brand }))
}

/// PUT /api/v1/brands/{id}
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateBrand>,
) -> AppResult<impl IntoResponse> {
    let brand = state.store.update_brand(&id, input).await?;
    Ok(Json(DataResponse { data: brand }))
}

/// DELETE /api/v1/brands/{id}
///
/// The last remaining brand cannot be deleted (409).
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_brand(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/brands/{id}/select
///
/// Make the brand current; its saved theme becomes the active theme and
/// is propagated to all previews.
pub async fn select_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let brand = state.store.select_brand(&id).await?;
    Ok(Json(DataResponse { data: brand }))
}
