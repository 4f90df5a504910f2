pub mod drafts;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod portal_store;
pub mod repositories;
pub mod stats;

pub use drafts::{AssignmentDraft, CareerDraft, PortfolioUpload};
pub use error::{Result, StoreError};
pub use portal_store::PortalStore;
pub use repositories::assignment_repository::AssignmentRepository;
pub use repositories::career_repository::CareerRepository;
pub use repositories::member_repository::MemberRepository;
pub use repositories::portfolio_repository::PortfolioRepository;
pub use stats::DashboardStats;
