//! Create requests for the mock collections, validated before insertion.

use chrono::NaiveDate;
use serde::Deserialize;
use ypg_core::{CareerCategory, CoreError, Result as CoreErrorResult};

const MAX_TITLE_LENGTH: usize = 200;

fn validate_title(title: &str) -> CoreErrorResult<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::validation("title", "title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::validation(
            "title",
            format!("title cannot exceed {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub growth: String,
    #[serde(default)]
    pub category: CareerCategory,
}

impl CareerDraft {
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_title(&self.title)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub category: CareerCategory,
}

impl AssignmentDraft {
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_title(&self.title)
    }
}

/// Metadata of an uploaded file; the content itself is discarded after sizing.
#[derive(Debug, Clone)]
pub struct PortfolioUpload {
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub size_bytes: u64,
}

impl PortfolioUpload {
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_title(&self.title)?;
        if self.file_name.trim().is_empty() {
            return Err(CoreError::validation("fileName", "a file is required"));
        }
        Ok(())
    }
}
