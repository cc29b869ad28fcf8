use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, member::MemberDto},
    server::{
        controller::param::LimitParam, error::AppError, model::IntoDto,
        service::leaderboard::LeaderboardService, state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the members with the highest bounties.
///
/// Ordered by bounty descending. A missing, zero or negative `limit` returns the
/// top 10.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    params(
        ("limit" = Option<i64>, Query, description = "Number of members to return (default: 10)")
    ),
    responses(
        (status = 200, description = "Members ordered by bounty", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    params: Result<Query<LimitParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let members = LeaderboardService::new(&state.db)
        .top_members(params.limit)
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}
