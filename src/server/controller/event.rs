use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::param::EventListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{event::CreateEventParams, IntoDto},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create an event.
///
/// # Access Control
/// - `Admin` - Bearer token must match the admin token
///
/// # Returns
/// - `201 Created` - Id of the new event
/// - `401 Unauthorized` - Missing or malformed Authorization header
/// - `403 Forbidden` - Wrong admin token
/// - `422 Unprocessable Entity` - Blank title, unknown status or incomplete result item
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = IdDto),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorDto),
        (status = 403, description = "Wrong admin token", body = ErrorDto),
        (status = 422, description = "Invalid event data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = CreateEventParams::from_dto(payload)?;
    let id = EventService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(IdDto { id: id.encode() })))
}

/// List events, optionally only those with an exact status.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("status" = Option<String>, Query, description = "Exact event status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<EventListParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let events = EventService::new(&state.db).list(params.status).await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Get a single event.
///
/// # Returns
/// - `200 OK` - The event
/// - `400 Bad Request` - Malformed event id
/// - `404 Not Found` - No event with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 400, description = "Invalid event id", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(event) = EventService::new(&state.db).get_by_id(&id).await? else {
        return Err(AppError::NotFound("Event not found".to_string()));
    };

    Ok((StatusCode::OK, Json(event.into_dto())))
}
