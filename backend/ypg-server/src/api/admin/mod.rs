pub mod admin_careers;
pub mod assignments;
pub mod create_member_request;
pub mod delete_response;
pub mod export;
pub mod list_members_query;
pub mod responses;
pub mod stats;
pub mod users;
