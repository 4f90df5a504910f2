use crate::{AssignmentDraft, Result as StoreErrorResult, StoreError, fixtures};

use log::info;
use tokio::sync::RwLock;
use uuid::Uuid;
use ypg_core::Assignment;

pub struct AssignmentRepository {
    assignments: RwLock<Vec<Assignment>>,
}

impl AssignmentRepository {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments: RwLock::new(assignments),
        }
    }

    pub fn seeded() -> Self {
        Self::new(fixtures::assignments())
    }

    pub async fn find_all(&self) -> Vec<Assignment> {
        self.assignments.read().await.clone()
    }

    pub async fn create(&self, draft: AssignmentDraft) -> StoreErrorResult<Assignment> {
        draft.validate()?;

        let assignment = Assignment {
            id: format!("assignment-{}", Uuid::new_v4()),
            title: draft.title.trim().to_string(),
            description: draft.description,
            due_date: draft.due_date,
            category: draft.category,
            active: true,
        };

        self.assignments.write().await.push(assignment.clone());
        info!("Created assignment {} ({})", assignment.id, assignment.title);

        Ok(assignment)
    }

    pub async fn toggle(&self, id: &str) -> StoreErrorResult<Assignment> {
        let mut assignments = self.assignments.write().await;

        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("Assignment", id))?;

        assignment.active = !assignment.active;
        Ok(assignment.clone())
    }

    pub async fn delete(&self, id: &str) -> StoreErrorResult<Assignment> {
        let mut assignments = self.assignments.write().await;

        let index = assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("Assignment", id))?;

        info!("Deleted assignment {id}");
        Ok(assignments.remove(index))
    }
}
