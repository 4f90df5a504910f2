//! Assignment content management handlers

use crate::{
    ApiResult, AppState, AssignmentListResponse, AssignmentResponse, CurrentAdmin, DeleteResponse,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ypg_store::AssignmentDraft;

/// GET /api/v1/admin/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Json<AssignmentListResponse> {
    let assignments = state.store.assignments.find_all().await;

    Json(AssignmentListResponse { assignments })
}

/// POST /api/v1/admin/assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Json(draft): Json<AssignmentDraft>,
) -> ApiResult<Response> {
    let assignment = state.store.assignments.create(draft).await?;

    Ok((StatusCode::CREATED, Json(AssignmentResponse { assignment })).into_response())
}

/// POST /api/v1/admin/assignments/{id}/toggle
pub async fn toggle_assignment(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<AssignmentResponse>> {
    let assignment = state.store.assignments.toggle(&id).await?;

    Ok(Json(AssignmentResponse { assignment }))
}

/// DELETE /api/v1/admin/assignments/{id}
pub async fn delete_assignment(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = state.store.assignments.delete(&id).await?;

    Ok(Json(DeleteResponse {
        deleted_id: removed.id,
    }))
}
