//! Factory functions for Challengermode roster payloads.
//!
//! Payloads are built as raw JSON so tests can also produce documents the roster schema
//! rejects.

use serde_json::{json, Value};

use crate::constant::TEST_TEAM_ID;

/// Creates a lineup member with a profile picture.
///
/// # Arguments
/// - `game_account_id` - SteamID32 such as `[U:1:1075413651]`
/// - `username` - Challengermode username
/// - `captain` - Whether the member captains the lineup
pub fn member(game_account_id: &str, username: &str, captain: bool) -> Value {
    json!({
        "captain": captain,
        "gameAccountId": game_account_id,
        "user": {
            "username": username,
            "profilePicture": {
                "url": format!("https://cdn.challengermode.com/avatars/{}.png", username),
                "width": 64,
                "height": 64
            }
        }
    })
}

/// Creates a lineup backed by a Challengermode team.
pub fn team_lineup(name: &str, members: Vec<Value>) -> Value {
    json!({
        "name": name,
        "team": {
            "id": TEST_TEAM_ID,
            "name": name,
            "description": "",
            "logo": {
                "url": "https://cdn.challengermode.com/logos/team.png",
                "width": 128,
                "height": 128
            }
        },
        "members": members
    })
}

/// Creates a lineup of players signed up together without a team.
pub fn group_lineup(name: &str, members: Vec<Value>) -> Value {
    json!({
        "name": name,
        "team": null,
        "members": members
    })
}

/// Creates the `data` object of a roster query response.
///
/// # Arguments
/// - `name` - Tournament name
/// - `roster` - Lineups confirmed on the tournament roster
/// - `signups` - Lineups signed up to the tournament
pub fn roster_data(name: &str, roster: Vec<Value>, signups: Vec<Value>) -> Value {
    let confirmed = roster.len();

    json!({
        "tournament": {
            "name": name,
            "description": "Test tournament",
            "attendance": {
                "availableSlotCount": 16,
                "confirmedLineupCount": confirmed,
                "signups": { "lineups": signups },
                "roster": { "lineups": roster }
            }
        }
    })
}

/// Creates a roster with one team lineup captained by its first member and one group lineup.
pub fn mock_roster_data() -> Value {
    roster_data(
        "Test Cup",
        vec![team_lineup(
            "Natus Vincere",
            vec![
                member("[U:1:1075413651]", "captain", true),
                member("[U:1:22202]", "rifler", false),
            ],
        )],
        vec![group_lineup(
            "Mix",
            vec![
                member("[U:1:1]", "solo", true),
                member("[U:1:2]", "duo", false),
                member("[U:1:3]", "trio", false),
            ],
        )],
    )
}

/// Wraps `data` into a successful GraphQL response.
pub fn graphql_data(data: Value) -> Value {
    json!({ "data": data })
}

/// Creates a failed GraphQL response carrying the provided error messages.
pub fn graphql_errors(messages: &[&str]) -> Value {
    let errors: Vec<Value> = messages
        .iter()
        .map(|message| json!({ "message": message }))
        .collect();

    json!({ "data": null, "errors": errors })
}
