pub mod admin;
pub mod careers;
pub mod error;
pub mod extractors;
pub mod portfolio;
pub mod session;
