use crate::{ApiError, AppState, CurrentAdmin, CurrentIdentity, CurrentStudent};

use ypg_session::{
    ADMIN_EMAIL, ADMIN_PASSWORD, Latency, MemoryStorage, MockBackend, STUDENT_EMAIL,
    STUDENT_PASSWORD, SessionMirror, SessionStore,
};
use ypg_store::PortalStore;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn create_test_state() -> AppState {
    let mirror = SessionMirror::new(Arc::new(MemoryStorage::new()));
    let backend = Arc::new(MockBackend::new(Latency::none()));
    let session = SessionStore::hydrate(mirror, backend).unwrap();

    AppState::new(session, PortalStore::seeded())
}

fn parts() -> axum::http::request::Parts {
    let request = Request::builder().body(Body::empty()).unwrap();
    request.into_parts().0
}

#[tokio::test]
async fn test_current_identity_rejects_when_logged_out() {
    let state = create_test_state();

    let result = CurrentIdentity::from_request_parts(&mut parts(), &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_current_student_accepts_student() {
    let state = create_test_state();
    state
        .session
        .login(STUDENT_EMAIL, STUDENT_PASSWORD)
        .await
        .unwrap();

    let result = CurrentStudent::from_request_parts(&mut parts(), &state).await;

    assert_eq!(result.ok().map(|s| s.0.id), Some("student-1".to_string()));
}

#[tokio::test]
async fn test_current_student_forbids_admin() {
    let state = create_test_state();
    state
        .session
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let result = CurrentStudent::from_request_parts(&mut parts(), &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_current_admin_forbids_student() {
    let state = create_test_state();
    state
        .session
        .login(STUDENT_EMAIL, STUDENT_PASSWORD)
        .await
        .unwrap();

    let result = CurrentAdmin::from_request_parts(&mut parts(), &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_current_admin_unauthorized_when_logged_out() {
    let state = create_test_state();

    let result = CurrentAdmin::from_request_parts(&mut parts(), &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
