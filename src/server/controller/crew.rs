use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        crew::{CreateCrewDto, CrewDetailDto, CrewDto},
    },
    server::{
        controller::param::CrewListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            crew::{CreateCrewParams, CrewListParams},
            IntoDto,
        },
        service::crew::CrewService,
        state::AppState,
    },
};

/// Tag for grouping crew endpoints in OpenAPI documentation
pub static CREW_TAG: &str = "crew";

/// Create a pirate crew.
///
/// # Access Control
/// - `Admin` - Bearer token must match the admin token
///
/// # Returns
/// - `201 Created` - Id of the new crew
/// - `401 Unauthorized` - Missing or malformed Authorization header
/// - `403 Forbidden` - Wrong admin token
/// - `422 Unprocessable Entity` - Blank name or unknown sea
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/crews",
    tag = CREW_TAG,
    request_body = CreateCrewDto,
    responses(
        (status = 201, description = "Successfully created crew", body = IdDto),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorDto),
        (status = 403, description = "Wrong admin token", body = ErrorDto),
        (status = 422, description = "Invalid crew data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_crew(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateCrewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = CreateCrewParams::from_dto(payload)?;
    let id = CrewService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(IdDto { id: id.encode() })))
}

/// List pirate crews.
///
/// Both filters are exact matches; `sea` is compared literally, so values containing
/// wildcard or pattern characters only match crews with that exact sea string.
#[utoipa::path(
    get,
    path = "/api/crews",
    tag = CREW_TAG,
    params(
        ("sea" = Option<String>, Query, description = "Exact sea name"),
        ("crew_of_month" = Option<bool>, Query, description = "Crew of the month flag")
    ),
    responses(
        (status = 200, description = "Successfully retrieved crews", body = Vec<CrewDto>),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_crews(
    State(state): State<AppState>,
    params: Result<Query<CrewListParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let params = CrewListParams {
        sea: params.sea,
        crew_of_month: params.crew_of_month,
    };

    let crews = CrewService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(crews.into_dto())))
}

/// Get a pirate crew with its members.
///
/// # Returns
/// - `200 OK` - Crew with an embedded `members` list, empty when it has none
/// - `400 Bad Request` - Malformed crew id
/// - `404 Not Found` - No crew with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/crews/{id}",
    tag = CREW_TAG,
    params(
        ("id" = String, Path, description = "Crew id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved crew", body = CrewDetailDto),
        (status = 400, description = "Invalid crew id", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_crew(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let crew = CrewService::new(&state.db).get_with_members(&id).await?;

    Ok((StatusCode::OK, Json(crew.into_dto())))
}
