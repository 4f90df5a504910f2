use crate::{AuthBackend, LoadResult, Registration, Result as SessionResult, SessionMirror};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, RwLock};
use ypg_core::{Identity, StudentIdentity};

/// Owner of the single current identity.
///
/// Reads go through the `RwLock`. Mutations additionally hold `mutation` so the
/// durable write and the in-memory swap of one operation are never interleaved
/// with another. Every mutation persists first and only then updates memory, so
/// a failed write leaves the current identity untouched.
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
    mutation: Mutex<()>,
    mirror: SessionMirror,
    backend: Arc<dyn AuthBackend>,
}

impl SessionStore {
    /// Creates a store seeded from the durable mirror.
    pub fn hydrate(mirror: SessionMirror, backend: Arc<dyn AuthBackend>) -> SessionResult<Self> {
        let LoadResult {
            identity,
            corruption_error,
        } = mirror.load()?;

        if let Some(error) = corruption_error {
            warn!("Starting logged out, stored session was unreadable: {error}");
        }

        Ok(Self {
            current: RwLock::new(identity),
            mutation: Mutex::new(()),
            mirror,
            backend,
        })
    }

    pub fn backend(&self) -> &Arc<dyn AuthBackend> {
        &self.backend
    }

    /// Snapshot of the current identity.
    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    pub async fn is_admin(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(Identity::is_admin)
    }

    pub async fn is_student(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(Identity::is_student)
    }

    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Identity> {
        let _guard = self.mutation.lock().await;

        let identity = match self.backend.authenticate(email, password).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Login rejected for {email}");
                return Err(e);
            }
        };

        self.replace(identity.clone()).await?;
        info!("Logged in {} as {}", identity.id(), identity.role());

        Ok(identity)
    }

    /// Clears the current identity and its durable mirror.
    ///
    /// Memory is always cleared; a failure to remove the durable record is
    /// still reported.
    pub async fn logout(&self) -> SessionResult<()> {
        let _guard = self.mutation.lock().await;

        let previous = self.current.write().await.take();
        if let Some(identity) = previous {
            info!("Logged out {}", identity.id());
        }

        self.mirror.clear()?;
        Ok(())
    }

    pub async fn register(&self, registration: Registration) -> SessionResult<StudentIdentity> {
        let _guard = self.mutation.lock().await;

        let student = self.backend.register(registration).await?;
        self.replace(Identity::Student(student.clone())).await?;

        Ok(student)
    }

    /// Marks the current student's email as verified. Token content is not
    /// inspected here; a non-student or missing identity is left alone.
    pub async fn verify_email(&self, token: &str) -> SessionResult<Option<Identity>> {
        let _guard = self.mutation.lock().await;

        self.backend.verify_email(token).await?;

        self.update_student(|student| student.email_verified = true)
            .await
    }

    /// Marks the current student's onboarding as complete.
    pub async fn complete_onboarding(&self) -> SessionResult<Option<Identity>> {
        let _guard = self.mutation.lock().await;

        self.update_student(|student| student.onboarding_completed = true)
            .await
    }

    async fn replace(&self, identity: Identity) -> SessionResult<()> {
        self.mirror.save(&identity)?;
        *self.current.write().await = Some(identity);
        Ok(())
    }

    /// Applies `change` to a copy of the current student, persists it, then swaps
    /// it in. Returns the resulting identity (unchanged for non-students).
    async fn update_student<F>(&self, change: F) -> SessionResult<Option<Identity>>
    where
        F: FnOnce(&mut StudentIdentity),
    {
        let mut next = match self.current.read().await.clone() {
            Some(identity) => identity,
            None => return Ok(None),
        };

        let Some(student) = next.as_student_mut() else {
            return Ok(Some(next));
        };
        change(student);

        self.replace(next.clone()).await?;
        info!("Updated session for {}", next.id());

        Ok(Some(next))
    }
}
