pub mod latency;
pub mod mock_backend;
pub mod registration;

pub use latency::Latency;
pub use mock_backend::MockBackend;
pub use registration::Registration;

use crate::Result as SessionResult;

use async_trait::async_trait;
use ypg_core::{Identity, StudentIdentity};

/// The only "network" the session store talks to.
///
/// [`MockBackend`] answers with canned results after a fixed delay; a real
/// implementation can be dropped in behind the same signatures.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Resolves credentials to an identity or fails with `InvalidCredentials`.
    async fn authenticate(&self, email: &str, password: &str) -> SessionResult<Identity>;

    /// Creates a new, unverified student.
    async fn register(&self, registration: Registration) -> SessionResult<StudentIdentity>;

    /// Confirms an emailed verification token.
    async fn verify_email(&self, token: &str) -> SessionResult<()>;

    /// Requests a password-reset email.
    async fn request_password_reset(&self, email: &str) -> SessionResult<()>;
}
