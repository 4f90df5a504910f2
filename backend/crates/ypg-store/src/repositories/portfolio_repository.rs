use crate::{PortfolioUpload, Result as StoreErrorResult};

use chrono::Utc;
use log::info;
use tokio::sync::RwLock;
use uuid::Uuid;
use ypg_core::{PortfolioFileType, PortfolioItem};

/// Uploaded portfolio metadata. Starts empty.
#[derive(Default)]
pub struct PortfolioRepository {
    items: RwLock<Vec<PortfolioItem>>,
}

impl PortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items owned by `owner_id`, newest first. Ties keep reverse upload order.
    pub async fn find_by_owner(&self, owner_id: &str) -> Vec<PortfolioItem> {
        let mut items: Vec<PortfolioItem> = self
            .items
            .read()
            .await
            .iter()
            .rev()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect();

        items.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        items
    }

    pub async fn find_all(&self) -> Vec<PortfolioItem> {
        self.items.read().await.clone()
    }

    pub async fn add(
        &self,
        owner_id: &str,
        upload: PortfolioUpload,
    ) -> StoreErrorResult<PortfolioItem> {
        upload.validate()?;

        let item = PortfolioItem {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: upload.title.trim().to_string(),
            description: upload.description,
            file_type: PortfolioFileType::from_file_name(&upload.file_name),
            file_name: upload.file_name,
            size_bytes: upload.size_bytes,
            uploaded_at: Utc::now(),
        };

        self.items.write().await.push(item.clone());
        info!(
            "Stored portfolio item {} for {owner_id} ({} bytes)",
            item.id, item.size_bytes
        );

        Ok(item)
    }
}
