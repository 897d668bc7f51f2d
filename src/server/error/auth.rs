use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failure to acquire a Challengermode access key.
///
/// `Clone` because a single refresh result is shared with every caller awaiting it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing required environment variable: CHALLENGERMODE_REFRESH_KEY")]
    MissingRefreshKey,
    #[error("Challengermode rejected the access key request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Challengermode returned a malformed access key response: {0}")]
    MalformedResponse(String),
    #[error("Failed to reach the Challengermode auth endpoint: {0}")]
    Transport(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            // Deployment issue rather than an upstream failure
            Self::MissingRefreshKey => InternalServerError(self).into_response(),
            err => {
                tracing::warn!("{}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to authenticate with Challengermode".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
