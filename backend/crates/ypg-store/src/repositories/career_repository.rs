use crate::{CareerDraft, Result as StoreErrorResult, StoreError, fixtures};

use log::info;
use tokio::sync::RwLock;
use uuid::Uuid;
use ypg_core::{CareerFilter, CareerPath};

pub struct CareerRepository {
    careers: RwLock<Vec<CareerPath>>,
}

impl CareerRepository {
    pub fn new(careers: Vec<CareerPath>) -> Self {
        Self {
            careers: RwLock::new(careers),
        }
    }

    pub fn seeded() -> Self {
        Self::new(fixtures::careers())
    }

    /// Every career, active or not.
    pub async fn find_all(&self) -> Vec<CareerPath> {
        self.careers.read().await.clone()
    }

    /// Active careers matching the explorer filter.
    pub async fn explore(&self, filter: &CareerFilter) -> Vec<CareerPath> {
        self.careers
            .read()
            .await
            .iter()
            .filter(|c| c.active && filter.matches(c))
            .cloned()
            .collect()
    }

    pub async fn create(&self, draft: CareerDraft) -> StoreErrorResult<CareerPath> {
        draft.validate()?;

        let career = CareerPath {
            id: format!("career-{}", Uuid::new_v4()),
            title: draft.title.trim().to_string(),
            description: draft.description,
            salary: draft.salary,
            education: draft.education,
            growth: draft.growth,
            category: draft.category,
            active: true,
        };

        self.careers.write().await.push(career.clone());
        info!("Created career {} ({})", career.id, career.title);

        Ok(career)
    }

    pub async fn toggle(&self, id: &str) -> StoreErrorResult<CareerPath> {
        let mut careers = self.careers.write().await;

        let career = careers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Career", id))?;

        career.active = !career.active;
        let state = if career.active { "active" } else { "inactive" };
        info!("Career {id} is now {state}");

        Ok(career.clone())
    }

    pub async fn delete(&self, id: &str) -> StoreErrorResult<CareerPath> {
        let mut careers = self.careers.write().await;

        let index = careers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Career", id))?;

        info!("Deleted career {id}");
        Ok(careers.remove(index))
    }
}
