//! Career explorer handlers

use crate::{ApiResult, AppState, CareerListResponse, CurrentStudent, ListCareersQuery};

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/v1/careers?category=&search=
///
/// Active careers only; the search is case-insensitive over title and description.
pub async fn list_careers(
    State(state): State<AppState>,
    CurrentStudent(_student): CurrentStudent,
    Query(query): Query<ListCareersQuery>,
) -> ApiResult<Json<CareerListResponse>> {
    let filter = query.into_filter()?;
    let careers = state.store.careers.explore(&filter).await;

    Ok(Json(CareerListResponse { careers }))
}
