use crate::{ADMIN_HOME_PATH, GuardOutcome, LOGIN_PATH, Navigation, Page, STUDENT_HOME_PATH};

use std::collections::HashMap;

use log::debug;
use ypg_core::{Identity, Role};

/// Maps request paths to pages and resolves navigations through each page's
/// guard chain.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<&'static str, Page>,
}

impl Default for RouteTable {
    fn default() -> Self {
        let mut routes: HashMap<&'static str, Page> =
            Page::ALL.iter().map(|page| (page.path(), *page)).collect();

        routes.insert("/dashboard", Page::Dashboard);
        routes.insert("/admin/dashboard", Page::AdminDashboard);

        Self { routes }
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a path, ignoring any query string and trailing slash.
    pub fn page_for(&self, path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        self.routes.get(normalized).copied()
    }

    pub fn resolve(&self, path: &str, identity: Option<&Identity>) -> Navigation {
        let Some(page) = self.page_for(path) else {
            let target = Self::fallback(identity);
            debug!("No route for {path}, redirecting to {target}");
            return Navigation::Redirect(target);
        };

        match page.guards().evaluate(identity) {
            GuardOutcome::Pass => Navigation::Render(page),
            GuardOutcome::Redirect(target) => Navigation::Redirect(target),
        }
    }

    /// Where an unknown path sends the user.
    pub fn fallback(identity: Option<&Identity>) -> &'static str {
        match identity.map(Identity::role) {
            Some(Role::Admin) => ADMIN_HOME_PATH,
            Some(Role::Student) => STUDENT_HOME_PATH,
            None => LOGIN_PATH,
        }
    }
}
