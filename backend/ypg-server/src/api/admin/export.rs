//! Data export handler

use crate::{ApiError, ApiResult, AppState, CurrentAdmin};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::info;
use ypg_core::ExportRequest;
use ypg_store::export::CSV_CONTENT_TYPE;

/// POST /api/v1/admin/export
///
/// Body `{"kind":"students","start":"2023-05-01","end":"2023-05-31"}`.
/// Answers with a CSV attachment.
pub async fn export_data(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(req): Json<ExportRequest>,
) -> ApiResult<Response> {
    let csv = state.store.export(&req).await?;
    info!("Admin {} exported {}", admin.id, req.kind.display_name());

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        req.file_name()
    ))
    .map_err(|e| ApiError::Internal {
        message: format!("Invalid export file name: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
