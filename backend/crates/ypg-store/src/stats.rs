use serde::Serialize;
use ypg_core::{Assignment, CareerPath, MemberRecord, MemberStatus, PortfolioItem};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub active_students: usize,
    pub pending_students: usize,
    pub active_careers: usize,
    pub active_assignments: usize,
    pub portfolio_items: usize,
}

impl DashboardStats {
    pub fn collect(
        members: &[MemberRecord],
        careers: &[CareerPath],
        assignments: &[Assignment],
        portfolio: &[PortfolioItem],
    ) -> Self {
        let active_students = members
            .iter()
            .filter(|m| m.status() == MemberStatus::Active)
            .count();

        Self {
            total_students: members.len(),
            active_students,
            pending_students: members.len() - active_students,
            active_careers: careers.iter().filter(|c| c.active).count(),
            active_assignments: assignments.iter().filter(|a| a.active).count(),
            portfolio_items: portfolio.len(),
        }
    }
}
