//! User management handlers

use crate::{
    ApiResult, AppState, CreateMemberRequest, CurrentAdmin, DeleteResponse, ListMembersQuery,
    MemberListResponse, MemberResponse,
};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

/// GET /api/v1/admin/users?search=&college=&status=
pub async fn list_users(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Query(query): Query<ListMembersQuery>,
) -> ApiResult<Json<MemberListResponse>> {
    let filter = query.into_filter()?;
    let users = state.store.members.find(&filter).await;

    Ok(Json(MemberListResponse { users }))
}

/// POST /api/v1/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(req): Json<CreateMemberRequest>,
) -> ApiResult<Response> {
    req.validate()?;

    let id = format!("student-{}", Uuid::new_v4());
    let user = state
        .store
        .members
        .create(req.into_record(id, Utc::now().date_naive()))
        .await?;
    info!("Admin {} created member {}", admin.id, user.id);

    Ok((StatusCode::CREATED, Json(MemberResponse { user })).into_response())
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = state.store.members.delete(&id).await?;

    Ok(Json(DeleteResponse {
        deleted_id: removed.id,
    }))
}
