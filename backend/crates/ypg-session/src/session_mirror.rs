use crate::{DurableStorage, LoadResult, StorageResult};

use std::sync::Arc;

use log::{info, warn};
use ypg_core::Identity;

/// Key holding the JSON-serialized current identity.
pub const USER_KEY: &str = "user";

/// Key holding an API bearer token, when one was issued.
pub const TOKEN_KEY: &str = "token";

/// Passive durable copy of the current identity.
///
/// Read once at startup, overwritten on every mutation, removed on logout.
#[derive(Clone)]
pub struct SessionMirror {
    storage: Arc<dyn DurableStorage>,
}

impl SessionMirror {
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        Self { storage }
    }

    /// Loads the stored identity.
    ///
    /// Returns:
    /// - `LoadResult { identity: Some(..), corruption_error: None }` - loaded
    /// - `LoadResult { identity: None, corruption_error: None }` - nothing stored
    /// - `LoadResult { identity: None, corruption_error: Some(..) }` - record was
    ///   malformed and has been discarded
    pub fn load(&self) -> StorageResult<LoadResult> {
        let Some(contents) = self.storage.get(USER_KEY)? else {
            info!("No stored session (logged out)");
            return Ok(LoadResult::default());
        };

        match serde_json::from_str::<Identity>(&contents) {
            Ok(identity) => {
                info!(
                    "Restored session for {} ({})",
                    identity.id(),
                    identity.role()
                );
                Ok(LoadResult {
                    identity: Some(identity),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Stored session is malformed, discarding it: {e}");
                self.storage.remove(USER_KEY)?;
                Ok(LoadResult {
                    identity: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    pub fn save(&self, identity: &Identity) -> StorageResult<()> {
        let json = serde_json::to_string(identity)?;
        self.storage.set(USER_KEY, &json)
    }

    /// Removes the stored identity and any token issued alongside it.
    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)
    }
}
