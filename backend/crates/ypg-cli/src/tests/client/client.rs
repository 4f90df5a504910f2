use crate::{Client, ClientError};

use std::sync::Arc;

use ypg_session::MemoryStorage;

fn client(base_url: &str) -> Client {
    Client::new(base_url, Arc::new(MemoryStorage::new()))
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    assert_eq!(client("http://localhost:8000/").base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    assert_eq!(client("http://localhost:8000").base_url, "http://localhost:8000");
}

#[test]
fn test_fresh_storage_has_no_local_identity() {
    let result = client("http://localhost:8000").local_identity().unwrap();

    assert!(result.is_none());
}

#[test]
fn test_unauthorized_error_exposes_redirect() {
    let error = ClientError::unauthorized("Sign in to continue", "/login");

    assert_eq!(error.redirect(), Some("/login"));
    assert!(error.to_string().contains("Sign in to continue"));
}

#[test]
fn test_api_error_has_no_redirect() {
    let error = ClientError::api_error("NOT_FOUND".into(), "gone".into());

    assert_eq!(error.redirect(), None);
}

#[tokio::test]
async fn test_invalid_base_url_reported() {
    let result = client("not a url").get_session().await;

    assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
}
