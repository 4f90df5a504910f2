use serde::Deserialize;
use ypg_core::{College, CoreError, Interest, MemberRecord, Result as CoreErrorResult};

/// Admin-side account creation. New members start unverified.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    pub college: String,
    pub interest: String,
}

impl CreateMemberRequest {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(CoreError::validation("email", "email must contain '@'"));
        }
        Ok(())
    }

    pub fn into_record(self, id: String, joined_date: chrono::NaiveDate) -> MemberRecord {
        MemberRecord {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            college: College::from_id(&self.college),
            interest: Interest::from_id(&self.interest),
            email_verified: false,
            onboarding_completed: false,
            joined_date,
        }
    }
}
