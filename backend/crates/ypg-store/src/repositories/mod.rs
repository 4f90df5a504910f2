pub mod assignment_repository;
pub mod career_repository;
pub mod member_repository;
pub mod portfolio_repository;
