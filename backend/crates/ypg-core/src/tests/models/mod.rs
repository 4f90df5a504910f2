mod catalog;
mod export_kind;
mod identity;
mod member_record;
mod career_path;
mod role;
