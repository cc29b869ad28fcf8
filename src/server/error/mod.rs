//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod identifier;
pub mod internal;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, identifier::IdError, internal::InternalError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while the remaining
/// variants map onto standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Admin gate rejection.
    ///
    /// Delegates to `AuthError::into_response()` for 401 / 403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Record shape rejected before any store access.
    ///
    /// Results in 422 Unprocessable Entity with the validation message.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Request body could not be parsed as the expected JSON document.
    ///
    /// Uses the rejection's own status code (400, 415 or 422).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be parsed into the expected parameters.
    ///
    /// Results in 400 Bad Request with the rejection text.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Externally supplied identifier did not decode.
    ///
    /// Results in 400 Bad Request, e.g. "Invalid crew id".
    #[error("Invalid {entity} id")]
    InvalidIdentifier {
        /// Human readable name of the referenced record kind
        entity: &'static str,
        #[source]
        source: IdError,
    },

    /// Database operation error from SeaORM.
    ///
    /// Connection failures result in 503 Service Unavailable, everything else in
    /// 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Socket binding or serving failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Bug-indicating internal failure.
    ///
    /// Results in 500 Internal Server Error. The detail is logged but a generic
    /// message is returned to the client.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    /// Returns true when the error means the store could not be reached at all.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            Self::DbErr(DbErr::ConnectionAcquire(_)) | Self::DbErr(DbErr::Conn(_))
        )
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidIdentifier` and malformed query strings
/// - 401 / 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `ValidationErr`
/// - 503 Service Unavailable - For database connection failures
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_storage_unavailable() {
            tracing::error!("Storage unavailable: {}", self);

            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Storage unavailable".to_string(),
                }),
            )
                .into_response();
        }

        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::JsonRejection(rejection) => (
                rejection.status(),
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::QueryRejection(rejection) => (
                rejection.status(),
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            err @ Self::InvalidIdentifier { .. } => {
                tracing::debug!("{:?}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
