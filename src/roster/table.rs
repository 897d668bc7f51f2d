//! Table rows rendered by the client.
//!
//! Rows are owned snapshots of the roster combined with the rating map so the UI can render them
//! without borrowing from the lookup state.

use std::collections::HashSet;

use crate::{
    model::roster::{DataError, LineupKey, MemberDto, RosterDto},
    roster::{
        aggregate::{aggregate, member_rating, Aggregate, RatingMap},
        steam_id::{to_canonical_id, FormatError, SteamId64},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct LineupRow {
    pub key: LineupKey,
    pub name: String,
    pub is_team: bool,
    pub captain: Result<MemberDto, DataError>,
    pub capacity: String,
    pub aggregate: Aggregate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    /// Unique within the roster, `<lineup key>::<member index>`
    pub key: String,
    pub member: MemberDto,
    pub steam_id: Result<SteamId64, FormatError>,
    pub rating: Option<i64>,
}

/// Players of a single lineup, listed under the lineup name.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerGroup {
    pub key: LineupKey,
    pub name: String,
    pub players: Vec<PlayerRow>,
}

pub fn lineup_rows(roster: &RosterDto, ratings: &RatingMap) -> Vec<LineupRow> {
    roster
        .lineups()
        .map(|(key, lineup)| LineupRow {
            key,
            name: lineup.name.clone(),
            is_team: lineup.is_team(),
            captain: lineup.captain().cloned(),
            capacity: lineup.capacity_label(),
            aggregate: aggregate(lineup, ratings),
        })
        .collect()
}

pub fn player_groups(roster: &RosterDto, ratings: &RatingMap) -> Vec<PlayerGroup> {
    roster
        .lineups()
        .map(|(key, lineup)| PlayerGroup {
            key,
            name: lineup.name.clone(),
            players: lineup
                .members
                .iter()
                .enumerate()
                .map(|(index, member)| PlayerRow {
                    key: format!("{}::{}", key, index),
                    member: member.clone(),
                    steam_id: to_canonical_id(&member.game_account_id),
                    rating: member_rating(&member.game_account_id, ratings),
                })
                .collect(),
        })
        .collect()
}

/// Canonical ids of all roster members to look up, in roster order without duplicates.
///
/// Members with malformed game account ids are skipped.
pub fn player_ids(roster: &RosterDto) -> Vec<SteamId64> {
    let mut seen = HashSet::new();

    roster
        .lineups()
        .flat_map(|(_, lineup)| lineup.members.iter())
        .filter_map(|member| to_canonical_id(&member.game_account_id).ok())
        .filter(|id| seen.insert(*id))
        .collect()
}
