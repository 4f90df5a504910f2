//! Portfolio handlers for the signed-in student

use crate::{
    ApiResult, AppState, CurrentStudent, PortfolioItemResponse, PortfolioListResponse,
    UploadPortfolioRequest,
};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ypg_store::PortfolioUpload;

/// GET /api/v1/portfolio
///
/// The student's own items, newest first.
pub async fn list_portfolio(
    State(state): State<AppState>,
    CurrentStudent(student): CurrentStudent,
) -> Json<PortfolioListResponse> {
    let items = state.store.portfolio.find_by_owner(&student.id).await;

    Json(PortfolioListResponse { items })
}

/// POST /api/v1/portfolio
pub async fn upload_portfolio_item(
    State(state): State<AppState>,
    CurrentStudent(student): CurrentStudent,
    Json(req): Json<UploadPortfolioRequest>,
) -> ApiResult<Response> {
    let upload = PortfolioUpload::try_from(req)?;
    let item = state.store.portfolio.add(&student.id, upload).await?;

    Ok((StatusCode::CREATED, Json(PortfolioItemResponse { item })).into_response())
}
