pub mod assignment;
pub mod career_category;
pub mod career_path;
pub mod college;
pub mod export_kind;
pub mod identity;
pub mod interest;
pub mod member_record;
pub mod member_status;
pub mod portfolio_file_type;
pub mod portfolio_item;
pub mod role;
