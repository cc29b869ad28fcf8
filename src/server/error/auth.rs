use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing Authorization header")]
    MissingCredentials,

    /// The `Authorization` header is present but is not a non-empty bearer token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Malformed Authorization header: {0}")]
    MalformedCredentials(String),

    /// A well-formed bearer token was supplied but does not match the admin secret.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied: {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingCredentials` / `MalformedCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCredentials | Self::MalformedCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Missing or invalid authorization header".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
