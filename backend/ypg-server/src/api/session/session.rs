//! Session REST API handlers
//!
//! Thin wrappers over the session store. Student mutations are mirrored into
//! the admin member list so user management sees new and updated accounts.

use crate::{
    ApiResult, AppState, ForgotPasswordRequest, LoginRequest, RegisterRequest, SessionResponse,
    VerifyEmailRequest,
};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use ypg_core::{Identity, MemberRecord};

/// GET /api/v1/session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.session.current().await.into())
}

/// POST /api/v1/session/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let identity = state.session.login(&req.email, &req.password).await?;

    Ok(Json(Some(identity).into()))
}

/// POST /api/v1/session/logout
pub async fn logout(State(state): State<AppState>) -> ApiResult<Json<SessionResponse>> {
    state.session.logout().await?;

    Ok(Json(None.into()))
}

/// POST /api/v1/session/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Response> {
    let student = state.session.register(req.into()).await?;
    let identity = Identity::Student(student);
    sync_member(&state, &identity).await;

    let body: SessionResponse = Some(identity).into();
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// POST /api/v1/session/verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    Json(req): Json<VerifyEmailRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let identity = state.session.verify_email(&req.token).await?;
    if let Some(ref identity) = identity {
        sync_member(&state, identity).await;
    }

    Ok(Json(identity.into()))
}

/// POST /api/v1/session/complete-onboarding
pub async fn complete_onboarding(
    State(state): State<AppState>,
) -> ApiResult<Json<SessionResponse>> {
    let identity = state.session.complete_onboarding().await?;
    if let Some(ref identity) = identity {
        sync_member(&state, identity).await;
    }

    Ok(Json(identity.into()))
}

/// POST /api/v1/session/forgot-password
///
/// Always reports success so the response does not reveal whether an
/// account exists.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> ApiResult<Response> {
    state
        .session
        .backend()
        .request_password_reset(&req.email)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(json!({ "status": "sent" }))).into_response())
}

/// Mirrors a student identity into the member list, keeping the original
/// join date of an existing record.
pub(crate) async fn sync_member(state: &AppState, identity: &Identity) {
    let Some(student) = identity.as_student() else {
        return;
    };

    let joined_date = state
        .store
        .members
        .find_by_id(&student.id)
        .await
        .map(|existing| existing.joined_date)
        .unwrap_or_else(|| Utc::now().date_naive());

    state
        .store
        .members
        .upsert(MemberRecord::from_student(student, joined_date))
        .await;
}
