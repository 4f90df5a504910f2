use crate::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Message shown to users for any credential mismatch.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Static message safe to show in a view.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE,
            Self::Storage { .. } => "Your session could not be saved. Please try again.",
        }
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
