use crate::{
    AssignmentRepository, CareerRepository, DashboardStats, MemberRepository,
    PortfolioRepository, Result as StoreErrorResult, export,
};

use log::info;
use ypg_core::ExportRequest;

/// All mock collections behind the portal.
pub struct PortalStore {
    pub members: MemberRepository,
    pub careers: CareerRepository,
    pub assignments: AssignmentRepository,
    pub portfolio: PortfolioRepository,
}

impl PortalStore {
    /// Collections populated with the demo fixtures.
    pub fn seeded() -> Self {
        Self {
            members: MemberRepository::seeded(),
            careers: CareerRepository::seeded(),
            assignments: AssignmentRepository::seeded(),
            portfolio: PortfolioRepository::new(),
        }
    }

    pub async fn stats(&self) -> DashboardStats {
        DashboardStats::collect(
            &self.members.find_all().await,
            &self.careers.find_all().await,
            &self.assignments.find_all().await,
            &self.portfolio.find_all().await,
        )
    }

    /// Validates the date range and renders the report as CSV.
    pub async fn export(&self, request: &ExportRequest) -> StoreErrorResult<String> {
        request.validate()?;

        let csv = export::render_csv(
            request,
            &self.members.find_all().await,
            &self.portfolio.find_all().await,
        );
        info!(
            "Exported {} from {} to {} ({} bytes)",
            request.kind,
            request.start,
            request.end,
            csv.len()
        );

        Ok(csv)
    }
}
