//! Requests made by the browser: the roster through our own API, ratings from FACEIT.

use uuid::Uuid;

use crate::{model::roster::RosterDto, roster::RatingMap, roster::SteamId64};

/// Retrieve a tournament roster from the server API
#[cfg(feature = "web")]
pub async fn fetch_roster(tournament_id: Uuid) -> Result<RosterDto, String> {
    use reqwasm::http::Request;

    use crate::model::api::ErrorDto;

    let response = Request::get(&format!(
        "/api/challengermode/roster?tournamentId={}",
        tournament_id
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<RosterDto>()
            .await
            .map_err(|e| format!("Failed to parse tournament roster: {}", e)),
        status => {
            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    status, error_dto.error
                ))
            } else {
                Err(format!("Request failed with status {}", status))
            }
        }
    }
}

/// Look up FACEIT ratings for the provided Steam ids
#[cfg(feature = "web")]
pub async fn fetch_ratings(ids: &[SteamId64]) -> Result<RatingMap, String> {
    use reqwasm::http::Request;

    use crate::model::faceit::{
        rating_lookup_url, rating_map, FaceitLookupResponse, FACEIT_ELO_URL,
    };

    let response = Request::get(&rating_lookup_url(FACEIT_ELO_URL, ids))
        .send()
        .await
        .map_err(|e| format!("Failed to send FACEIT request: {}", e))?;

    if response.status() != 200 {
        return Err(format!(
            "FACEIT request failed with status {}",
            response.status()
        ));
    }

    let players = response
        .json::<FaceitLookupResponse>()
        .await
        .map_err(|e| format!("Failed to parse FACEIT players: {}", e))?;

    Ok(rating_map(players))
}

#[cfg(not(feature = "web"))]
pub async fn fetch_roster(_tournament_id: Uuid) -> Result<RosterDto, String> {
    Err("Roster lookups are only available in the browser".to_string())
}

#[cfg(not(feature = "web"))]
pub async fn fetch_ratings(_ids: &[SteamId64]) -> Result<RatingMap, String> {
    Err("Rating lookups are only available in the browser".to_string())
}
