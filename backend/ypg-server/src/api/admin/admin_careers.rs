//! Career content management handlers

use crate::{
    ApiResult, AppState, CareerListResponse, CareerResponse, CurrentAdmin, DeleteResponse,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ypg_store::CareerDraft;

/// GET /api/v1/admin/careers
///
/// Every career including inactive ones.
pub async fn list_all_careers(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Json<CareerListResponse> {
    let careers = state.store.careers.find_all().await;

    Json(CareerListResponse { careers })
}

/// POST /api/v1/admin/careers
pub async fn create_career(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(draft): Json<CareerDraft>,
) -> ApiResult<Response> {
    let career = state.store.careers.create(draft).await?;

    Ok((StatusCode::CREATED, Json(CareerResponse { career })).into_response())
}

/// POST /api/v1/admin/careers/{id}/toggle
pub async fn toggle_career(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<CareerResponse>> {
    let career = state.store.careers.toggle(&id).await?;

    Ok(Json(CareerResponse { career }))
}

/// DELETE /api/v1/admin/careers/{id}
pub async fn delete_career(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = state.store.careers.delete(&id).await?;

    Ok(Json(DeleteResponse {
        deleted_id: removed.id,
    }))
}
