use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use ypg_core::CoreError;
use ypg_session::SessionError;
use ypg_store::StoreError;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Career career-9 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Career career-9 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("title", "Title too long")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_invalid_credentials_uses_fixed_message() {
    let error = ApiError::from(SessionError::invalid_credentials());
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Storage unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = body_json(ApiError::forbidden("admins only")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[test]
fn test_core_validation_converts_with_field() {
    let error = ApiError::from(CoreError::validation("email", "email must contain '@'"));

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("email"));
            assert_eq!(message, "email must contain '@'");
        }
        other => panic!("expected validation, got {other:?}"),
    }
}

#[test]
fn test_store_not_found_converts_to_not_found() {
    let error = ApiError::from(StoreError::not_found("career", "career-42"));

    assert!(matches!(error, ApiError::NotFound { ref message, .. } if message.contains("career-42")));
}

#[tokio::test]
async fn test_store_already_exists_returns_409() {
    let error = ApiError::from(StoreError::already_exists("Member", "student-7"));
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Member student-7 already exists");
}
