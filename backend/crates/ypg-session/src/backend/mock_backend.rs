use crate::{AuthBackend, Latency, Registration, Result as SessionResult, SessionError};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use ypg_core::{AdminIdentity, College, Identity, Interest, StudentIdentity};

pub const ADMIN_EMAIL: &str = "admin@ypg.org";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const STUDENT_EMAIL: &str = "student@example.com";
pub const STUDENT_PASSWORD: &str = "student123";

/// Canned backend with exactly two accounts. Every call waits `latency` first.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    latency: Latency,
}

impl MockBackend {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn demo_admin() -> Identity {
        Identity::Admin(AdminIdentity {
            id: "admin-1".to_string(),
            name: "YPG Admin".to_string(),
            email: ADMIN_EMAIL.to_string(),
        })
    }

    pub fn demo_student() -> Identity {
        Identity::Student(StudentIdentity {
            id: "student-1".to_string(),
            name: "Jamie Smith".to_string(),
            email: STUDENT_EMAIL.to_string(),
            college: College::Harlow,
            interest: Interest::Chef,
            email_verified: true,
            onboarding_completed: true,
        })
    }
}

#[async_trait]
impl AuthBackend for MockBackend {
    async fn authenticate(&self, email: &str, password: &str) -> SessionResult<Identity> {
        self.latency.simulate().await;

        match (email, password) {
            (ADMIN_EMAIL, ADMIN_PASSWORD) => Ok(Self::demo_admin()),
            (STUDENT_EMAIL, STUDENT_PASSWORD) => Ok(Self::demo_student()),
            _ => Err(SessionError::invalid_credentials()),
        }
    }

    async fn register(&self, registration: Registration) -> SessionResult<StudentIdentity> {
        self.latency.simulate().await;

        let id = format!("student-{}", Utc::now().timestamp_millis());
        info!("Registered {} as {id}", registration.email);

        Ok(StudentIdentity::registered(
            id,
            registration.name,
            registration.email,
            registration.college,
            registration.interest,
        ))
    }

    async fn verify_email(&self, token: &str) -> SessionResult<()> {
        self.latency.simulate().await;

        // Token content is not checked; any token verifies.
        debug!("Accepted verification token ({} chars)", token.len());
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> SessionResult<()> {
        self.latency.simulate().await;

        info!("Password reset requested for {email}");
        Ok(())
    }
}
