use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, diagnostics::DiagnosticsDto},
    server::{model::IntoDto, service::diagnostics::DiagnosticsService, state::AppState},
};

/// Tag for grouping service status endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

/// Liveness message.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API is running", body = MessageDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(MessageDto {
        message: "Grandline API running".to_string(),
    })
}

/// Store connectivity diagnostics.
///
/// Always answers 200; connection problems are reported inside the body as
/// human-readable status strings.
///
/// # Returns
/// - `200 OK` - Diagnostics report
#[utoipa::path(
    get,
    path = "/test",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Store connectivity report", body = DiagnosticsDto)
    ),
)]
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let report = DiagnosticsService::new(&state.db)
        .report(state.database_url_set)
        .await;

    (StatusCode::OK, Json(report.into_dto()))
}
