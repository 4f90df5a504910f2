use crate::{Guard, GuardOutcome};

use log::debug;
use ypg_core::Identity;

/// Guards evaluated in order; the first failure wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardChain {
    guards: Vec<Guard>,
}

impl GuardChain {
    pub fn new(guards: Vec<Guard>) -> Self {
        Self { guards }
    }

    /// No guards at all: login, registration, forgot password.
    pub fn public() -> Self {
        Self::default()
    }

    pub fn authenticated() -> Self {
        Self::new(vec![Guard::Authenticated])
    }

    /// Authenticated and, for students, email verified.
    pub fn verified() -> Self {
        Self::new(vec![Guard::Authenticated, Guard::EmailVerified])
    }

    /// The full student chain: authentication, role, email, onboarding.
    pub fn student() -> Self {
        Self::new(vec![
            Guard::Authenticated,
            Guard::StudentRole,
            Guard::EmailVerified,
            Guard::OnboardingComplete,
        ])
    }

    pub fn admin() -> Self {
        Self::new(vec![Guard::Authenticated, Guard::AdminRole])
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    pub fn is_public(&self) -> bool {
        self.guards.is_empty()
    }

    pub fn evaluate(&self, identity: Option<&Identity>) -> GuardOutcome {
        for guard in &self.guards {
            if let GuardOutcome::Redirect(target) = guard.check(identity) {
                debug!("Guard {guard} failed, redirecting to {target}");
                return GuardOutcome::Redirect(target);
            }
        }

        GuardOutcome::Pass
    }
}
