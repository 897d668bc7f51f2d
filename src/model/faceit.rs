//! FACEIT ELO lookup DTOs.
//!
//! The lookup API accepts repeated `id` query parameters holding 64-bit Steam ids and answers
//! with an object keyed by the same ids, each value being the FACEIT player or `null` when the
//! Steam account has no FACEIT profile.

use std::collections::HashMap;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::roster::{RatingMap, SteamId64};

/// Base URL of the FACEIT ELO lookup API
pub static FACEIT_ELO_URL: &str = "https://faceit-elo.funclub.pro/";

/// Lookup response, keyed by 64-bit Steam id as a decimal string
pub type FaceitLookupResponse = HashMap<String, Option<FaceitPlayerDto>>;

/// Only `games.cs2.faceit_elo` is read, every other field may be absent without failing the
/// lookup of the remaining players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceitPlayerDto {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub games: FaceitGamesDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceitGamesDto {
    #[serde(default)]
    pub cs2: Option<FaceitGameDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceitGameDto {
    #[serde(default)]
    pub faceit_elo: Option<f64>,
    #[serde(default)]
    pub skill_level: Option<u8>,
}

/// Builds the lookup URL for the provided Steam ids, `<base>?id=<id>&id=<id>...`
pub fn rating_lookup_url(base: &str, ids: &[SteamId64]) -> String {
    let query = ids
        .iter()
        .map(|id| format!("id={}", id))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}

/// Converts a lookup response into a [`RatingMap`] of CS2 ELO ratings.
///
/// Players without CS2 data or without an ELO are mapped to `None`, entries keyed by something other than a
/// 64-bit Steam id are skipped.
pub fn rating_map(response: FaceitLookupResponse) -> RatingMap {
    response
        .into_iter()
        .filter_map(|(key, player)| match key.parse::<SteamId64>() {
            Ok(steam_id) => {
                let elo = player
                    .and_then(|player| player.games.cs2)
                    .and_then(|cs2| cs2.faceit_elo);

                Some((steam_id, elo))
            }
            Err(_) => {
                tracing::warn!(key = %key, "Skipping FACEIT lookup entry with invalid Steam id");

                None
            }
        })
        .collect()
}
