//! Axum extractors gating the data API on the current session

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use ypg_core::{AdminIdentity, Identity, StudentIdentity};

const NOT_SIGNED_IN: &str = "Sign in to continue";

/// Any signed-in identity. Rejects with 401 when logged out.
pub struct CurrentIdentity(pub Identity);

/// The signed-in student. 401 when logged out, 403 for admins.
pub struct CurrentStudent(pub StudentIdentity);

/// The signed-in admin. 401 when logged out, 403 for students.
pub struct CurrentAdmin(pub AdminIdentity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match state.session.current().await {
                Some(identity) => Ok(CurrentIdentity(identity)),
                None => Err(ApiError::unauthorized(NOT_SIGNED_IN)),
            }
        }
    }
}

impl FromRequestParts<AppState> for CurrentStudent {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;

            match identity {
                Identity::Student(student) => Ok(CurrentStudent(student)),
                Identity::Admin(admin) => {
                    log::debug!("Admin {} tried a student endpoint", admin.id);
                    Err(ApiError::forbidden("Only students can access this resource"))
                }
            }
        }
    }
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;

            match identity {
                Identity::Admin(admin) => Ok(CurrentAdmin(admin)),
                Identity::Student(student) => {
                    log::debug!("Student {} tried an admin endpoint", student.id);
                    Err(ApiError::forbidden("Only administrators can access this resource"))
                }
            }
        }
    }
}
