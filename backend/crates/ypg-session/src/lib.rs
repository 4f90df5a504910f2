//! Session state for the portal.
//!
//! [`SessionStore`] owns the single current [`Identity`](ypg_core::Identity),
//! mirrors every mutation to [`DurableStorage`] through [`SessionMirror`], and
//! talks to the outside world only through the [`AuthBackend`] seam.

pub mod backend;
pub mod error;
pub mod load_result;
pub mod session_mirror;
pub mod session_store;
pub mod storage;

#[cfg(test)]
mod tests;

pub use backend::{
    AuthBackend, Latency, MockBackend, Registration,
    mock_backend::{ADMIN_EMAIL, ADMIN_PASSWORD, STUDENT_EMAIL, STUDENT_PASSWORD},
};
pub use error::{Result, SessionError};
pub use load_result::LoadResult;
pub use session_mirror::{SessionMirror, TOKEN_KEY, USER_KEY};
pub use session_store::SessionStore;
pub use storage::{
    DurableStorage, FileStorage, MemoryStorage, StorageError, StorageResult,
};
