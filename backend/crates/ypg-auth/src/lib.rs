//! Route guard composition.
//!
//! Each [`Page`] carries a [`GuardChain`]: an ordered list of [`Guard`]s that is
//! evaluated against the current identity on every navigation. The first
//! failing guard decides the redirect; if all pass the page renders.

pub mod guard;
pub mod guard_chain;
pub mod navigation;
pub mod page;
pub mod route_table;

pub use guard::{Guard, GuardOutcome};
pub use guard_chain::GuardChain;
pub use navigation::Navigation;
pub use page::Page;
pub use route_table::RouteTable;

pub const LOGIN_PATH: &str = "/login";
pub const STUDENT_HOME_PATH: &str = "/";
pub const ADMIN_HOME_PATH: &str = "/admin";
pub const EMAIL_VERIFICATION_PATH: &str = "/email-verification";
pub const ONBOARDING_PATH: &str = "/onboarding";

#[cfg(test)]
mod tests;
