//! Challengermode roster client.

use dioxus_logger::tracing;
use reqwest::header::AUTHORIZATION;
use uuid::Uuid;

use crate::{
    model::roster::RosterDto,
    server::{
        error::{
            challengermode::{QueryError, ValidationError},
            Error,
        },
        service::challengermode::{
            query::{GraphQlRequest, GraphQlResponse, RosterVariables, ROSTER_QUERY},
            schema::parse_roster,
            token::TokenCache,
        },
    },
};

/// Client for the Challengermode GraphQL API.
#[derive(Clone)]
pub struct ChallengermodeClient {
    http_client: reqwest::Client,
    graphql_url: String,
    token_cache: TokenCache,
}

impl ChallengermodeClient {
    /// Creates a new instance of [`ChallengermodeClient`]
    pub fn new(
        http_client: reqwest::Client,
        graphql_url: impl Into<String>,
        token_cache: TokenCache,
    ) -> Self {
        Self {
            http_client,
            graphql_url: graphql_url.into(),
            token_cache,
        }
    }

    pub fn token_cache(&self) -> &TokenCache {
        &self.token_cache
    }

    /// Fetches the signups and confirmed roster of a tournament.
    ///
    /// The access key is requested from the [`TokenCache`] on every call so an expired key is
    /// never reused.
    ///
    /// # Returns
    /// - `Ok(RosterDto)` - The validated tournament roster
    /// - `Err(Error::AuthError)` - Failed to acquire an access key
    /// - `Err(Error::QueryError)` - Challengermode reported a GraphQL error
    /// - `Err(Error::ValidationError)` - The response does not match the roster schema
    /// - `Err(Error::ReqwestError)` - The request could not be sent or the body could not be read
    pub async fn fetch_roster(&self, tournament_id: Uuid) -> Result<RosterDto, Error> {
        let token = self.token_cache.get_token().await?;

        let request = GraphQlRequest {
            query: ROSTER_QUERY,
            variables: RosterVariables { tournament_id },
        };

        let response = self
            .http_client
            .post(&self.graphql_url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let envelope = match serde_json::from_str::<GraphQlResponse>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(QueryError {
                    messages: vec![format!("HTTP {}: {}", status.as_u16(), body)],
                }
                .into());
            }
            Err(e) => {
                return Err(ValidationError {
                    path: "$".to_string(),
                    reason: format!("response is not a GraphQL envelope: {}", e),
                }
                .into());
            }
        };

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            return Err(QueryError {
                messages: errors.into_iter().map(|error| error.message).collect(),
            }
            .into());
        }

        if !status.is_success() {
            return Err(QueryError {
                messages: vec![format!("HTTP {}: {}", status.as_u16(), body)],
            }
            .into());
        }

        let data = envelope.data.ok_or_else(|| ValidationError {
            path: "data".to_string(),
            reason: "missing or null".to_string(),
        })?;

        let roster = parse_roster(&data)?;

        tracing::debug!(
            tournament_id = %tournament_id,
            roster_lineups = roster.tournament.attendance.roster.lineups.len(),
            signup_lineups = roster.tournament.attendance.signups.lineups.len(),
            "Fetched Challengermode roster"
        );

        Ok(roster)
    }
}
