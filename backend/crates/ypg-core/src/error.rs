use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid career category: {value} {location}")]
    InvalidCareerCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid portfolio file type: {value} {location}")]
    InvalidFileType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid member status: {value} {location}")]
    InvalidMemberStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid export kind: {value} {location}")]
    InvalidExportKind {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a validation error for a specific field at caller location.
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field name for validation errors, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
