use crate::{Result as StoreErrorResult, StoreError, fixtures};

use log::info;
use tokio::sync::RwLock;
use ypg_core::{MemberFilter, MemberRecord};

/// Registered students as the admin sees them, newest first.
pub struct MemberRepository {
    members: RwLock<Vec<MemberRecord>>,
}

impl MemberRepository {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self {
            members: RwLock::new(members),
        }
    }

    pub fn seeded() -> Self {
        Self::new(fixtures::members())
    }

    pub async fn find_all(&self) -> Vec<MemberRecord> {
        self.members.read().await.clone()
    }

    pub async fn find(&self, filter: &MemberFilter) -> Vec<MemberRecord> {
        self.members
            .read()
            .await
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<MemberRecord> {
        self.members
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    /// Inserts a new record at the front. Fails if the id is already taken.
    pub async fn create(&self, record: MemberRecord) -> StoreErrorResult<MemberRecord> {
        let mut members = self.members.write().await;

        if members.iter().any(|m| m.id == record.id) {
            return Err(StoreError::already_exists("Member", &record.id));
        }

        info!("Created member {} ({})", record.id, record.email);
        members.insert(0, record.clone());
        Ok(record)
    }

    /// Inserts a record at the front, or replaces the record with the same id
    /// in place.
    pub async fn upsert(&self, record: MemberRecord) {
        let mut members = self.members.write().await;

        match members.iter_mut().find(|m| m.id == record.id) {
            Some(existing) => *existing = record,
            None => {
                info!("Added member {} ({})", record.id, record.email);
                members.insert(0, record);
            }
        }
    }

    pub async fn delete(&self, id: &str) -> StoreErrorResult<MemberRecord> {
        let mut members = self.members.write().await;

        let index = members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("Member", id))?;

        let removed = members.remove(index);
        info!("Deleted member {id}");
        Ok(removed)
    }
}
