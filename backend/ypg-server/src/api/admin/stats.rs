use crate::{AppState, CurrentAdmin};

use axum::{Json, extract::State};
use ypg_store::DashboardStats;

/// GET /api/v1/admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Json<DashboardStats> {
    Json(state.store.stats().await)
}
