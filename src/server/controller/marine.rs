use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        marine::{CreateMarineDto, MarineDto},
    },
    server::{
        controller::param::LimitParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{marine::CreateMarineParams, IntoDto},
        service::marine::MarineService,
        state::AppState,
    },
};

/// Tag for grouping marine endpoints in OpenAPI documentation
pub static MARINE_TAG: &str = "marine";

/// Create a marine.
///
/// # Access Control
/// - `Admin` - Bearer token must match the admin token
///
/// # Returns
/// - `201 Created` - Id of the new marine
/// - `401 Unauthorized` - Missing or malformed Authorization header
/// - `403 Forbidden` - Wrong admin token
/// - `422 Unprocessable Entity` - Blank name or rank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/marines",
    tag = MARINE_TAG,
    request_body = CreateMarineDto,
    responses(
        (status = 201, description = "Successfully created marine", body = IdDto),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorDto),
        (status = 403, description = "Wrong admin token", body = ErrorDto),
        (status = 422, description = "Invalid marine data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_marine(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateMarineDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = CreateMarineParams::from_dto(payload)?;
    let id = MarineService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(IdDto { id: id.encode() })))
}

/// List marines.
///
/// A positive `limit` truncates the list; zero, negative or absent returns every marine.
#[utoipa::path(
    get,
    path = "/api/marines",
    tag = MARINE_TAG,
    params(
        ("limit" = Option<i64>, Query, description = "Maximum number of marines to return")
    ),
    responses(
        (status = 200, description = "Successfully retrieved marines", body = Vec<MarineDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_marines(
    State(state): State<AppState>,
    params: Result<Query<LimitParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let limit = params.limit.filter(|n| *n > 0).map(|n| n as u64);

    let marines = MarineService::new(&state.db).list(limit).await?;

    Ok((StatusCode::OK, Json(marines.into_dto())))
}
