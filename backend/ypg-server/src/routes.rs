use crate::{
    AppState, complete_onboarding, create_assignment, create_career, create_user,
    delete_assignment, delete_career, delete_user, export_data, forgot_password, get_session,
    get_stats, health, list_all_careers, list_assignments, list_careers, list_portfolio,
    list_users, login, logout, pages, register, toggle_assignment, toggle_career,
    upload_portfolio_item, verify_email,
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Session
        .route("/api/v1/session", get(get_session))
        .route("/api/v1/session/login", post(login))
        .route("/api/v1/session/logout", post(logout))
        .route("/api/v1/session/register", post(register))
        .route("/api/v1/session/verify-email", post(verify_email))
        .route(
            "/api/v1/session/complete-onboarding",
            post(complete_onboarding),
        )
        .route("/api/v1/session/forgot-password", post(forgot_password))
        // Student
        .route("/api/v1/careers", get(list_careers))
        .route(
            "/api/v1/portfolio",
            get(list_portfolio).post(upload_portfolio_item),
        )
        // Admin
        .route("/api/v1/admin/stats", get(get_stats))
        .route("/api/v1/admin/users", get(list_users).post(create_user))
        .route("/api/v1/admin/users/{id}", delete(delete_user))
        .route(
            "/api/v1/admin/careers",
            get(list_all_careers).post(create_career),
        )
        .route("/api/v1/admin/careers/{id}", delete(delete_career))
        .route("/api/v1/admin/careers/{id}/toggle", post(toggle_career))
        .route(
            "/api/v1/admin/assignments",
            get(list_assignments).post(create_assignment),
        )
        .route("/api/v1/admin/assignments/{id}", delete(delete_assignment))
        .route(
            "/api/v1/admin/assignments/{id}/toggle",
            post(toggle_assignment),
        )
        .route("/api/v1/admin/export", post(export_data));

    // Pages
    for path in pages::PAGE_PATHS {
        router = router.route(path, get(pages::navigate));
    }

    router
        .fallback(pages::fallback)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
