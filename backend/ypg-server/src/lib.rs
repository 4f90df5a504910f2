pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{
        admin_careers::{create_career, delete_career, list_all_careers, toggle_career},
        assignments::{create_assignment, delete_assignment, list_assignments, toggle_assignment},
        create_member_request::CreateMemberRequest,
        delete_response::DeleteResponse,
        export::export_data,
        list_members_query::ListMembersQuery,
        responses::{
            AssignmentListResponse, AssignmentResponse, CareerResponse, MemberListResponse,
            MemberResponse,
        },
        stats::get_stats,
        users::{create_user, delete_user, list_users},
    },
    careers::{
        career_list_response::CareerListResponse, careers::list_careers,
        list_careers_query::ListCareersQuery,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_identity::{CurrentAdmin, CurrentIdentity, CurrentStudent},
    portfolio::{
        portfolio::{list_portfolio, upload_portfolio_item},
        portfolio_item_response::PortfolioItemResponse,
        portfolio_list_response::PortfolioListResponse,
        upload_portfolio_request::UploadPortfolioRequest,
    },
    session::{
        forgot_password_request::ForgotPasswordRequest,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        session::{
            complete_onboarding, forgot_password, get_session, login, logout, register,
            verify_email,
        },
        session_response::SessionResponse,
        verify_email_request::VerifyEmailRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
