pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::assignment::Assignment;
pub use models::career_category::CareerCategory;
pub use models::career_path::{CareerFilter, CareerPath};
pub use models::college::College;
pub use models::export_kind::{ExportKind, ExportRequest};
pub use models::identity::{AdminIdentity, Identity, StudentIdentity};
pub use models::interest::Interest;
pub use models::member_record::{MemberFilter, MemberRecord};
pub use models::member_status::MemberStatus;
pub use models::portfolio_file_type::PortfolioFileType;
pub use models::portfolio_item::PortfolioItem;
pub use models::role::Role;
