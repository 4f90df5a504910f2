use crate::{College, Interest, MemberStatus, StudentIdentity};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered student as seen from the admin side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub college: College,
    pub interest: Interest,
    pub email_verified: bool,
    pub onboarding_completed: bool,
    pub joined_date: NaiveDate,
}

impl MemberRecord {
    pub fn from_student(student: &StudentIdentity, joined_date: NaiveDate) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
            college: student.college.clone(),
            interest: student.interest.clone(),
            email_verified: student.email_verified,
            onboarding_completed: student.onboarding_completed,
            joined_date,
        }
    }

    pub fn status(&self) -> MemberStatus {
        if self.email_verified && self.onboarding_completed {
            MemberStatus::Active
        } else {
            MemberStatus::Pending
        }
    }
}

/// User management filter. Every criterion is optional; search is
/// case-insensitive over name and email.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub search: Option<String>,
    pub college: Option<College>,
    pub status: Option<MemberStatus>,
}

impl MemberFilter {
    pub fn matches(&self, member: &MemberRecord) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                member.name.to_lowercase().contains(&term)
                    || member.email.to_lowercase().contains(&term)
            }
        };
        let matches_college = self.college.as_ref().is_none_or(|c| &member.college == c);
        let matches_status = self.status.is_none_or(|s| member.status() == s);

        matches_search && matches_college && matches_status
    }
}
