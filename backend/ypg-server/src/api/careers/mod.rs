pub mod career_list_response;
pub mod careers;
pub mod list_careers_query;
