use crate::ApiError;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use ypg_store::PortfolioUpload;

/// Upload body. `content` is the base64-encoded file; only its size is kept.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPortfolioRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub file_name: String,
    pub content: String,
}

impl TryFrom<UploadPortfolioRequest> for PortfolioUpload {
    type Error = ApiError;

    #[track_caller]
    fn try_from(req: UploadPortfolioRequest) -> Result<Self, Self::Error> {
        let bytes = STANDARD
            .decode(req.content.trim())
            .map_err(|e| ApiError::validation("content", format!("Invalid base64 content: {e}")))?;

        Ok(PortfolioUpload {
            title: req.title,
            description: req.description,
            file_name: req.file_name,
            size_bytes: bytes.len() as u64,
        })
    }
}
