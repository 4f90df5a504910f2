use crate::GuardChain;

use serde::Serialize;

/// Every screen of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Register,
    ForgotPassword,
    EmailVerification,
    Onboarding,
    Dashboard,
    Portfolio,
    Careers,
    Resources,
    Profile,
    AdminDashboard,
    AdminUsers,
    AdminContent,
    AdminExport,
}

impl Page {
    pub const ALL: [Page; 14] = [
        Page::Login,
        Page::Register,
        Page::ForgotPassword,
        Page::EmailVerification,
        Page::Onboarding,
        Page::Dashboard,
        Page::Portfolio,
        Page::Careers,
        Page::Resources,
        Page::Profile,
        Page::AdminDashboard,
        Page::AdminUsers,
        Page::AdminContent,
        Page::AdminExport,
    ];

    /// Canonical path. `/dashboard` and `/admin/dashboard` are accepted aliases.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::EmailVerification => "/email-verification",
            Self::Onboarding => "/onboarding",
            Self::Dashboard => "/",
            Self::Portfolio => "/portfolio",
            Self::Careers => "/careers",
            Self::Resources => "/resources",
            Self::Profile => "/profile",
            Self::AdminDashboard => "/admin",
            Self::AdminUsers => "/admin/users",
            Self::AdminContent => "/admin/content",
            Self::AdminExport => "/admin/export",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::ForgotPassword => "Reset password",
            Self::EmailVerification => "Verify your email",
            Self::Onboarding => "Welcome",
            Self::Dashboard => "Dashboard",
            Self::Portfolio => "Portfolio",
            Self::Careers => "Career Explorer",
            Self::Resources => "Resources",
            Self::Profile => "Profile",
            Self::AdminDashboard => "Admin Dashboard",
            Self::AdminUsers => "User Management",
            Self::AdminContent => "Content Management",
            Self::AdminExport => "Data Export",
        }
    }

    pub fn guards(&self) -> GuardChain {
        match self {
            Self::Login | Self::Register | Self::ForgotPassword => GuardChain::public(),
            Self::EmailVerification => GuardChain::authenticated(),
            Self::Onboarding => GuardChain::verified(),
            Self::Dashboard
            | Self::Portfolio
            | Self::Careers
            | Self::Resources
            | Self::Profile => GuardChain::student(),
            Self::AdminDashboard | Self::AdminUsers | Self::AdminContent | Self::AdminExport => {
                GuardChain::admin()
            }
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
