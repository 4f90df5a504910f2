//! Page navigation
//!
//! Every page request resolves through the route table. A passing navigation
//! renders a JSON view of the page; a failing one answers `303 See Other`
//! pointing at the first failed guard's target.

use crate::api::session::session::sync_member;
use crate::{ApiError, ApiResult, AppState};

use axum::{
    Json,
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use log::debug;
use serde::{Deserialize, Serialize};
use ypg_auth::{Navigation, Page};
use ypg_core::Identity;

/// Paths served by [`navigate`]; anything else falls through to [`fallback`].
pub const PAGE_PATHS: [&str; 16] = [
    "/login",
    "/register",
    "/forgot-password",
    "/email-verification",
    "/onboarding",
    "/",
    "/dashboard",
    "/portfolio",
    "/careers",
    "/resources",
    "/profile",
    "/admin",
    "/admin/dashboard",
    "/admin/users",
    "/admin/content",
    "/admin/export",
];

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub page: Page,
    pub path: &'static str,
    pub title: &'static str,
    pub user: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationStatus>,
}

/// GET on any page path.
pub async fn navigate(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> ApiResult<Response> {
    let identity = state.session.current().await;

    match state.routes.resolve(uri.path(), identity.as_ref()) {
        Navigation::Redirect(target) => {
            debug!("{} -> {target}", uri.path());
            Ok(Redirect::to(target).into_response())
        }
        Navigation::Render(Page::EmailVerification) => {
            render_email_verification(&state, identity, query.token).await
        }
        Navigation::Render(page) => Ok(Json(view(page, identity, None)).into_response()),
    }
}

/// Unknown paths: JSON 404 under `/api`, role-based redirect elsewhere.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ApiError::not_found(format!("No endpoint at {}", uri.path())).into_response();
    }

    let identity = state.session.current().await;
    match state.routes.resolve(uri.path(), identity.as_ref()) {
        Navigation::Redirect(target) => Redirect::to(target).into_response(),
        Navigation::Render(page) => Json(view(page, identity, None)).into_response(),
    }
}

/// Verifies with the link's token when one is present. Without a token the
/// page only reports the current status.
async fn render_email_verification(
    state: &AppState,
    identity: Option<Identity>,
    token: Option<String>,
) -> ApiResult<Response> {
    let mut identity = identity;

    if let Some(token) = token.filter(|t| !t.trim().is_empty())
        && identity
            .as_ref()
            .is_some_and(Identity::awaiting_email_verification)
    {
        identity = state.session.verify_email(&token).await?;
        if let Some(ref verified) = identity {
            sync_member(state, verified).await;
        }
    }

    let status = if identity
        .as_ref()
        .is_some_and(Identity::awaiting_email_verification)
    {
        VerificationStatus::Pending
    } else {
        VerificationStatus::Verified
    };

    Ok(Json(view(Page::EmailVerification, identity, Some(status))).into_response())
}

fn view(page: Page, user: Option<Identity>, verification: Option<VerificationStatus>) -> PageView {
    PageView {
        page,
        path: page.path(),
        title: page.title(),
        user,
        verification,
    }
}
