use crate::PortfolioFileType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a piece of work a student uploaded. File contents are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub file_type: PortfolioFileType,
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}
