//! Access key endpoint mocks.

use chrono::{DateTime, Utc};
use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{AUTH_PATH, TEST_REFRESH_KEY},
    TestSetup,
};

impl TestSetup {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AuthFixtures<'a> {
    /// Create a mock access key endpoint exchanging [`TEST_REFRESH_KEY`] for `access_key`.
    ///
    /// The mock only matches requests carrying the test refresh key and verifies it was called
    /// exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `access_key` - Access key returned by the endpoint
    /// - `expires_at` - Expiry returned alongside the access key
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_access_key_endpoint(
        &mut self,
        access_key: &str,
        expires_at: DateTime<Utc>,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "value": access_key,
            "expiresAt": expires_at.to_rfc3339(),
        });

        self.setup
            .server
            .mock("POST", AUTH_PATH)
            .match_body(Matcher::Json(json!({ "refreshKey": TEST_REFRESH_KEY })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock access key endpoint answering with an arbitrary status and body.
    ///
    /// Used to simulate rejected refresh keys and malformed responses.
    pub fn create_access_key_raw_endpoint(
        &mut self,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", AUTH_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
