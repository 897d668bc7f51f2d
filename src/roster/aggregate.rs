//! Per-lineup ELO statistics.

use std::collections::HashMap;

use crate::{
    model::roster::LineupDto,
    roster::steam_id::{to_canonical_id, SteamId64},
};

/// FACEIT ratings keyed by canonical Steam id, `None` when the player was not found.
pub type RatingMap = HashMap<SteamId64, Option<f64>>;

/// ELO statistics of a single lineup.
///
/// `min`, `max` and `mean` are `None` when no member of the lineup has a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    /// All members of the lineup, rated or not
    pub member_count: usize,
    /// Members with a rating
    pub rated_count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Floor of `sum / rated_count`
    pub mean: Option<i64>,
    /// Sum of floored ratings, 0 when no member is rated
    pub sum: i64,
}

/// Looks up the floored rating of a member by game account id.
///
/// Returns `None` for account ids that are not valid SteamID32s, for players missing from the
/// rating map and for players the rating provider did not find.
pub fn member_rating(game_account_id: &str, ratings: &RatingMap) -> Option<i64> {
    let steam_id = to_canonical_id(game_account_id).ok()?;

    ratings
        .get(&steam_id)
        .copied()
        .flatten()
        .map(|rating| rating.floor() as i64)
}

/// Computes ELO statistics for a lineup.
///
/// Ratings are floored before any arithmetic to match the provider's integer tiers. Unrated
/// members count towards `member_count` only.
pub fn aggregate(lineup: &LineupDto, ratings: &RatingMap) -> Aggregate {
    let rated: Vec<i64> = lineup
        .members
        .iter()
        .filter_map(|member| member_rating(&member.game_account_id, ratings))
        .collect();

    let sum: i64 = rated.iter().sum();
    let rated_count = rated.len();
    let mean = (rated_count > 0).then(|| sum.div_euclid(rated_count as i64));

    Aggregate {
        member_count: lineup.members.len(),
        rated_count,
        min: rated.iter().copied().min(),
        max: rated.iter().copied().max(),
        mean,
        sum,
    }
}
