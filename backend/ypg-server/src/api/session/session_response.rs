use serde::Serialize;
use ypg_core::Identity;

/// The current identity, `null` when logged out.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<Identity>,
}

impl From<Option<Identity>> for SessionResponse {
    fn from(user: Option<Identity>) -> Self {
        Self { user }
    }
}
