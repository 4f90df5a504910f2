use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LATENCY_MS, DEFAULT_STORAGE_DIR, MAX_LATENCY_MS,
};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Durable storage directory, relative to the config dir
    pub storage_dir: String,
    /// Fixed delay applied to every simulated backend call
    pub latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: String::from(DEFAULT_STORAGE_DIR),
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_dir.trim().is_empty() {
            return Err(ConfigError::session("session.storage_dir cannot be empty"));
        }

        if Path::new(&self.storage_dir).is_absolute() || self.storage_dir.contains("..") {
            return Err(ConfigError::session(
                "session.storage_dir must be relative and cannot contain '..'",
            ));
        }

        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::session(format!(
                "session.latency_ms must be <= {}, got {}",
                MAX_LATENCY_MS, self.latency_ms
            )));
        }

        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
