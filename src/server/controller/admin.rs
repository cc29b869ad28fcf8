use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{admin::SeedReportDto, api::ErrorDto},
    server::{
        controller::param::SeedParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::IntoDto,
        service::seed::SeedService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Seed fixture data.
///
/// Each collection receives its fixtures only when empty, unless `force` is set.
///
/// # Access Control
/// - `Admin` - Bearer token must match the admin token
///
/// # Returns
/// - `200 OK` - Number of records inserted per collection
/// - `400 Bad Request` - Unrecognised `force` value
/// - `401 Unauthorized` - Missing or malformed Authorization header
/// - `403 Forbidden` - Wrong admin token
/// - `500 Internal Server Error` - Database error; earlier inserts are kept
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = ADMIN_TAG,
    params(
        ("force" = Option<bool>, Query, description = "Insert even into non-empty collections (default: false)")
    ),
    responses(
        (status = 200, description = "Seeding finished", body = SeedReportDto),
        (status = 400, description = "Malformed force flag", body = ErrorDto),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorDto),
        (status = 403, description = "Wrong admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn seed(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<SeedParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require(&[Permission::Admin])?;
    let Query(params) = params?;

    let report = SeedService::new(&state.db)
        .seed(params.force.unwrap_or(false))
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
