use crate::{
    ADMIN_HOME_PATH, EMAIL_VERIFICATION_PATH, LOGIN_PATH, ONBOARDING_PATH, STUDENT_HOME_PATH,
};

use ypg_core::Identity;

/// A single navigation precondition paired with where to send the user when
/// it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// Someone is logged in.
    Authenticated,
    /// The current identity is a student.
    StudentRole,
    /// The current identity is an admin.
    AdminRole,
    /// Students must have verified their email. Admins pass.
    EmailVerified,
    /// Students must have completed onboarding. Admins pass.
    OnboardingComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Pass,
    Redirect(&'static str),
}

impl GuardOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl Guard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated => "authenticated",
            Self::StudentRole => "student_role",
            Self::AdminRole => "admin_role",
            Self::EmailVerified => "email_verified",
            Self::OnboardingComplete => "onboarding_complete",
        }
    }

    pub fn redirect_target(&self) -> &'static str {
        match self {
            Self::Authenticated => LOGIN_PATH,
            Self::StudentRole => ADMIN_HOME_PATH,
            Self::AdminRole => STUDENT_HOME_PATH,
            Self::EmailVerified => EMAIL_VERIFICATION_PATH,
            Self::OnboardingComplete => ONBOARDING_PATH,
        }
    }

    pub fn allows(&self, identity: Option<&Identity>) -> bool {
        match (self, identity) {
            (Self::Authenticated, identity) => identity.is_some(),
            (Self::StudentRole, Some(identity)) => identity.is_student(),
            (Self::AdminRole, Some(identity)) => identity.is_admin(),
            (Self::EmailVerified, Some(identity)) => !identity.awaiting_email_verification(),
            (Self::OnboardingComplete, Some(identity)) => !identity.awaiting_onboarding(),
            // Everything past authentication presupposes an identity.
            (_, None) => false,
        }
    }

    pub fn check(&self, identity: Option<&Identity>) -> GuardOutcome {
        if self.allows(identity) {
            GuardOutcome::Pass
        } else {
            GuardOutcome::Redirect(self.redirect_target())
        }
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
