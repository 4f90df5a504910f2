#![allow(dead_code)]

//! Test infrastructure for ypg-server API tests

use ypg_server::{AppState, build_router};
use ypg_session::{
    ADMIN_EMAIL, ADMIN_PASSWORD, Latency, MemoryStorage, MockBackend, STUDENT_EMAIL,
    STUDENT_PASSWORD, SessionMirror, SessionStore,
};
use ypg_store::PortalStore;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    pub storage: Arc<MemoryStorage>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Create AppState over in-memory storage with no simulated latency
pub fn create_test_app() -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let mirror = SessionMirror::new(storage.clone());
    let backend = Arc::new(MockBackend::new(Latency::none()));
    let session = SessionStore::hydrate(mirror, backend).unwrap();

    TestApp {
        state: AppState::new(session, PortalStore::seeded()),
        storage,
    }
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn login_admin(&self) {
        self.state
            .session
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .unwrap();
    }

    pub async fn login_student(&self) {
        self.state
            .session
            .login(STUDENT_EMAIL, STUDENT_PASSWORD)
            .await
            .unwrap();
    }

    /// Registers a fresh, unverified student through the API.
    pub async fn register_student(&self) -> Value {
        let response = self
            .post(
                "/api/v1/session/register",
                serde_json::json!({
                    "name": "Sam Taylor",
                    "email": "sam@example.com",
                    "password": "secret",
                    "college": "southend",
                    "interest": "baker",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()["user"].clone()
    }
}
