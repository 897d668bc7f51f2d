//! Challengermode GraphQL documents and request/response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Lineup fields requested for both the signups and the roster collections
macro_rules! lineup_fields {
    () => {
        r#"
            name
            team {
              id
              name
              description
              logo {
                width
                height
                url
              }
            }
            members {
              captain
              gameAccountId
              user {
                username
                profilePicture {
                  url
                  width
                  height
                }
              }
            }
        "#
    };
}

/// Tournament details with all signed up and confirmed lineups in a single round trip
pub const ROSTER_QUERY: &str = concat!(
    r#"
query ($tournamentId: UUID!) {
  tournament(tournamentId: $tournamentId) {
    name
    description
    attendance {
      availableSlotCount
      confirmedLineupCount
      signups {
        lineups {"#,
    lineup_fields!(),
    r#"}
      }
      roster {
        lineups(limit: 100) {"#,
    lineup_fields!(),
    r#"}
      }
    }
  }
}
"#
);

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<V: Serialize> {
    pub query: &'static str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterVariables {
    pub tournament_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorDto>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorDto {
    pub message: String,
}
