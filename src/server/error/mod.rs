//! Error types for the server application.
//!
//! Errors are grouped per domain (configuration, Challengermode authentication, Challengermode
//! queries). All errors implement `IntoResponse` for axum responses and use `thiserror` for
//! their `Display` and `Error` implementations.

pub mod auth;
pub mod challengermode;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError,
        challengermode::{QueryError, ValidationError},
        config::ConfigError,
    },
};

/// Main error type for the server application.
///
/// Aggregates all domain-specific error types and external library errors, `#[from]` allows
/// conversion with the `?` operator. The `IntoResponse` implementation maps errors to HTTP
/// responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Failure to acquire a Challengermode access key.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// GraphQL-level error reported by Challengermode.
    #[error(transparent)]
    QueryError(#[from] QueryError),
    /// Challengermode response does not match the roster schema.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Invalid request parameter supplied by the API consumer.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the request
        name: &'static str,
        /// Human readable explanation
        reason: String,
    },
    /// Development-only endpoint requested outside of development mode.
    #[error("This endpoint is only available in development mode.")]
    DevelopmentOnly,
    /// Outbound HTTP error (connection issues, unreadable bodies).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid request parameters
/// - 403 Forbidden - Development-only endpoint outside of development mode
/// - 502 Bad Gateway - Challengermode authentication, query, validation or transport failures
/// - 500 Internal Server Error - Configuration errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::QueryError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::InvalidParameter { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::DevelopmentOnly => (StatusCode::FORBIDDEN, self.to_string()).into_response(),
            Self::ReqwestError(err) => {
                tracing::warn!("Challengermode request failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to reach Challengermode".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client to
/// avoid leaking implementation details.
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
