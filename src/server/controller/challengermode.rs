use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, roster::RosterDto},
    server::{error::Error, model::app::AppState},
};

pub static CHALLENGERMODE_TAG: &str = "challengermode";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RosterParams {
    /// Challengermode tournament ID (UUID)
    pub tournament_id: Option<String>,
}

/// Parses the `tournamentId` query parameter
fn parse_tournament_id(tournament_id: Option<&str>) -> Result<Uuid, Error> {
    let tournament_id = tournament_id.ok_or(Error::InvalidParameter {
        name: "tournamentId",
        reason: "parameter is required".to_string(),
    })?;

    Uuid::parse_str(tournament_id.trim()).map_err(|_| Error::InvalidParameter {
        name: "tournamentId",
        reason: format!("{:?} is not a valid UUID", tournament_id),
    })
}

/// Get the signups and confirmed roster of a Challengermode tournament
///
/// # Responses
/// - 200 (OK): Tournament details with signup and roster lineups
/// - 400 (Bad Request): Missing or malformed tournament ID
/// - 502 (Bad Gateway): Challengermode authentication, query, or response validation failed
/// - 500 (Internal Server Error): The Challengermode refresh key is not configured
#[utoipa::path(
    get,
    path = "/api/challengermode/roster",
    tag = CHALLENGERMODE_TAG,
    params(RosterParams),
    responses(
        (status = 200, description = "Success when retrieving the tournament roster", body = RosterDto),
        (status = 400, description = "Missing or malformed tournament ID", body = ErrorDto),
        (status = 502, description = "Challengermode request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    Query(params): Query<RosterParams>,
) -> Result<impl IntoResponse, Error> {
    let tournament_id = parse_tournament_id(params.tournament_id.as_deref())?;

    let roster = state.challengermode.fetch_roster(tournament_id).await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Get the current Challengermode access key for local inspection
///
/// # Responses
/// - 200 (OK): The raw access key as plain text
/// - 403 (Forbidden): The server is not running in development mode
/// - 502 (Bad Gateway): Failed to refresh the access key
/// - 500 (Internal Server Error): The Challengermode refresh key is not configured
#[utoipa::path(
    get,
    path = "/api/challengermode/token",
    tag = CHALLENGERMODE_TAG,
    responses(
        (status = 200, description = "Current access key", body = String, content_type = "text/plain"),
        (status = 403, description = "Only available in development mode", body = String, content_type = "text/plain"),
        (status = 502, description = "Challengermode authentication failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_token(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    if !state.mode.is_development() {
        return Err(Error::DevelopmentOnly);
    }

    let token = state.challengermode.token_cache().get_token().await?;

    Ok((StatusCode::OK, token))
}
