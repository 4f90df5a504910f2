use crate::{College, Interest, Role};

use serde::{Deserialize, Serialize};

/// The authenticated user's role-tagged record.
///
/// Serialized with the role as discriminant so the persisted shape is
/// `{"role":"student","id":...,"emailVerified":false,...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Identity {
    Student(StudentIdentity),
    Admin(AdminIdentity),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub college: College,
    pub interest: Interest,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub onboarding_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl StudentIdentity {
    /// A freshly registered student: unverified, onboarding not started.
    pub fn registered(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        college: College,
        interest: Interest,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            college,
            interest,
            email_verified: false,
            onboarding_completed: false,
        }
    }
}

impl Identity {
    pub fn id(&self) -> &str {
        match self {
            Self::Student(s) => &s.id,
            Self::Admin(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Student(s) => &s.name,
            Self::Admin(a) => &a.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Student(s) => &s.email,
            Self::Admin(a) => &a.email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Admin(_) => Role::Admin,
        }
    }

    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    pub fn as_student(&self) -> Option<&StudentIdentity> {
        match self {
            Self::Student(s) => Some(s),
            Self::Admin(_) => None,
        }
    }

    pub fn as_student_mut(&mut self) -> Option<&mut StudentIdentity> {
        match self {
            Self::Student(s) => Some(s),
            Self::Admin(_) => None,
        }
    }

    /// True only for a student whose email is still unverified.
    pub fn awaiting_email_verification(&self) -> bool {
        self.as_student().is_some_and(|s| !s.email_verified)
    }

    /// True only for a student who has not finished onboarding.
    pub fn awaiting_onboarding(&self) -> bool {
        self.as_student().is_some_and(|s| !s.onboarding_completed)
    }
}

impl From<StudentIdentity> for Identity {
    fn from(student: StudentIdentity) -> Self {
        Self::Student(student)
    }
}

impl From<AdminIdentity> for Identity {
    fn from(admin: AdminIdentity) -> Self {
        Self::Admin(admin)
    }
}
