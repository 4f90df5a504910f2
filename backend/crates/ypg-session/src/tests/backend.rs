use crate::{
    ADMIN_EMAIL, ADMIN_PASSWORD, AuthBackend, Latency, MockBackend, Registration, STUDENT_EMAIL,
    STUDENT_PASSWORD, SessionError,
};

use std::time::{Duration, Instant};

use ypg_core::{College, Interest, Role};

fn backend() -> MockBackend {
    MockBackend::new(Latency::none())
}

fn registration() -> Registration {
    Registration {
        name: "Sam Taylor".into(),
        email: "sam@example.com".into(),
        password: "hunter2".into(),
        college: College::Southend,
        interest: Interest::Baker,
    }
}

#[tokio::test]
async fn given_admin_credentials_when_authenticate_then_admin_identity() {
    let identity = backend()
        .authenticate(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    assert_eq!(identity.role(), Role::Admin);
    assert_eq!(identity.id(), "admin-1");
    assert_eq!(identity.name(), "YPG Admin");
}

#[tokio::test]
async fn given_student_credentials_when_authenticate_then_demo_student() {
    let identity = backend()
        .authenticate(STUDENT_EMAIL, STUDENT_PASSWORD)
        .await
        .unwrap();

    let student = identity.as_student().unwrap();
    assert_eq!(student.id, "student-1");
    assert_eq!(student.name, "Jamie Smith");
    assert_eq!(student.college, College::Harlow);
    assert_eq!(student.interest, Interest::Chef);
    assert!(student.email_verified);
    assert!(student.onboarding_completed);
}

#[tokio::test]
async fn given_swapped_password_when_authenticate_then_invalid_credentials() {
    let result = backend().authenticate(ADMIN_EMAIL, STUDENT_PASSWORD).await;

    assert!(matches!(result, Err(SessionError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_differently_cased_email_when_authenticate_then_rejected() {
    let result = backend()
        .authenticate("Admin@YPG.org", ADMIN_PASSWORD)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_registration_when_register_then_time_based_student_id() {
    let student = backend().register(registration()).await.unwrap();

    let millis = student.id.strip_prefix("student-").unwrap();
    assert!(millis.parse::<i64>().is_ok());
    assert_eq!(student.name, "Sam Taylor");
    assert_eq!(student.college, College::Southend);
    assert!(!student.email_verified);
    assert!(!student.onboarding_completed);
}

#[tokio::test]
async fn given_any_token_when_verify_email_then_ok() {
    backend().verify_email("").await.unwrap();
    backend().verify_email("anything").await.unwrap();
}

#[tokio::test]
async fn given_email_when_request_password_reset_then_ok() {
    backend()
        .request_password_reset("someone@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn given_latency_when_authenticate_then_waits_at_least_delay() {
    let backend = MockBackend::new(Latency::from_millis(30));
    let started = Instant::now();

    let _ = backend.authenticate("nobody@example.com", "nope").await;

    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[test]
fn given_default_latency_then_zero() {
    assert_eq!(Latency::default().delay(), Duration::ZERO);
    assert_eq!(Latency::none(), Latency::new(Duration::ZERO));
}

#[test]
fn given_registration_when_debug_then_password_redacted() {
    let rendered = format!("{:?}", registration());

    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}
