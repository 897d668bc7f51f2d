//! GraphQL endpoint mocks.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::{GRAPHQL_PATH, TEST_ACCESS_KEY, TEST_TOURNAMENT_ID},
    fixtures::roster::{factory, RosterFixtures},
};

impl<'a> RosterFixtures<'a> {
    /// Create a mock GraphQL endpoint answering the roster query of [`TEST_TOURNAMENT_ID`].
    ///
    /// The mock only matches requests authorized with [`TEST_ACCESS_KEY`] and verifies it was
    /// called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `data` - `data` object of the response, see [`factory::roster_data`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_roster_endpoint(&mut self, data: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", GRAPHQL_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_ACCESS_KEY).as_str())
            .match_body(Matcher::PartialJson(json!({
                "variables": { "tournamentId": TEST_TOURNAMENT_ID }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::graphql_data(data).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GraphQL endpoint answering any request with an arbitrary status and body.
    pub fn create_graphql_raw_endpoint(
        &mut self,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", GRAPHQL_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
