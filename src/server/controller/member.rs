use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        member::{CreateMemberDto, MemberDto},
    },
    server::{
        controller::param::MemberListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{member::CreateMemberParams, IntoDto},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping crew member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Create a crew member.
///
/// The referenced crew must exist at creation time.
///
/// # Access Control
/// - `Admin` - Bearer token must match the admin token
///
/// # Returns
/// - `201 Created` - Id of the new member
/// - `400 Bad Request` - Malformed crew id
/// - `401 Unauthorized` - Missing or malformed Authorization header
/// - `403 Forbidden` - Wrong admin token
/// - `404 Not Found` - Crew does not exist
/// - `422 Unprocessable Entity` - Blank name or negative bounty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Successfully created member", body = IdDto),
        (status = 400, description = "Invalid crew id", body = ErrorDto),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorDto),
        (status = 403, description = "Wrong admin token", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 422, description = "Invalid member data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = CreateMemberParams::from_dto(payload)?;
    let id = MemberService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(IdDto { id: id.encode() })))
}

/// List crew members, optionally only those of one crew.
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(
        ("crew_id" = Option<String>, Query, description = "Crew id to filter by")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<MemberDto>),
        (status = 400, description = "Invalid crew id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    params: Result<Query<MemberListParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let members = MemberService::new(&state.db).list(params.crew_id).await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}
