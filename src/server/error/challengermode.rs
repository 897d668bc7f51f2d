use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Error reported by the Challengermode GraphQL API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Challengermode query failed: {}", .messages.join("; "))]
pub struct QueryError {
    pub messages: Vec<String>,
}

/// Challengermode response that does not match the expected roster schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid Challengermode response at {path}: {reason}")]
pub struct ValidationError {
    /// JSON path of the first offending field, e.g. `tournament.attendance.roster.lineups[0].name`
    pub path: String,
    pub reason: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: format!("Challengermode error: {}", self.messages.join("; ")),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: format!("Unexpected Challengermode response at {}", self.path),
            }),
        )
            .into_response()
    }
}
