//! REST API error types
//!
//! Every failure renders as `{"error":{"code","message","field"}}` with a
//! matching HTTP status.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use ypg_core::CoreError;
use ypg_session::{SessionError, error::INVALID_CREDENTIALS_MESSAGE};
use ypg_store::StoreError;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No current session (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Credential mismatch on login (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Logged in with the wrong role (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{self}"),
            _ => log::warn!("{self}"),
        }

        let (status, body) = match self {
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: INVALID_CREDENTIALS_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            SessionError::Storage { ref source, .. } => {
                // Storage details stay in the log
                log::error!("Session storage failure: {source}");
                ApiError::Internal {
                    message: e.user_message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let (field, message) = match e {
            CoreError::Validation { message, field, .. } => (field, message),
            CoreError::InvalidRole { value, .. } => {
                (Some("role".into()), format!("Unknown role '{value}'"))
            }
            CoreError::InvalidCareerCategory { value, .. } => (
                Some("category".into()),
                format!("Unknown career category '{value}'"),
            ),
            CoreError::InvalidFileType { value, .. } => (
                Some("fileType".into()),
                format!("Unknown file type '{value}'"),
            ),
            CoreError::InvalidMemberStatus { value, .. } => (
                Some("status".into()),
                format!("Unknown member status '{value}'"),
            ),
            CoreError::InvalidExportKind { value, .. } => {
                (Some("kind".into()), format!("Unknown export kind '{value}'"))
            }
        };

        ApiError::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{entity} {id} not found"),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::AlreadyExists { entity, id, .. } => ApiError::Conflict {
                message: format!("{entity} {id} already exists"),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Core { source, .. } => ApiError::from(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
