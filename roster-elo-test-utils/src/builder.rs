//! Declarative setup of the mock Challengermode server.
//!
//! Endpoints are queued on the [`TestBuilder`] and registered on the mock server during the final
//! `build()` call.

use chrono::{DateTime, Utc};
use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Custom mock endpoints
    mock_builders: Vec<MockBuilder>,

    // Pre-configured endpoint shortcuts
    access_key_endpoints: Vec<(String, DateTime<Utc>, usize)>, // (access_key, expires_at, expected_requests)
    roster_endpoints: Vec<(Value, usize)>,                     // (data, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder without any endpoints.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            access_key_endpoints: Vec::new(),
            roster_endpoints: Vec::new(),
        }
    }

    /// Add an access key endpoint exchanging the test refresh key for `access_key`.
    ///
    /// # Arguments
    /// - `access_key` - Access key returned by the endpoint
    /// - `expires_at` - Expiry returned alongside the access key
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_access_key_endpoint(
        mut self,
        access_key: &str,
        expires_at: DateTime<Utc>,
        expected_requests: usize,
    ) -> Self {
        self.access_key_endpoints
            .push((access_key.to_string(), expires_at, expected_requests));
        self
    }

    /// Add a GraphQL endpoint answering the roster query of the test tournament with `data`.
    ///
    /// # Arguments
    /// - `data` - `data` object of the response, see [`factory::roster_data`](crate::fixtures::roster::factory::roster_data)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_roster_endpoint(mut self, data: Value, expected_requests: usize) -> Self {
        self.roster_endpoints.push((data, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// Custom endpoints are registered before the pre-configured ones, so they take precedence
    /// when both match a request.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("POST", "/graphql")
    ///             .with_status(503)
    ///             .expect(1)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test setup, registering all queued endpoints on a fresh mock server.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server with all endpoints registered
    /// - `Err(TestError)` - Setup failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (access_key, expires_at, expected) in self.access_key_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_access_key_endpoint(&access_key, expires_at, expected),
            );
        }

        for (data, expected) in self.roster_endpoints {
            mocks.push(setup.roster().create_roster_endpoint(data, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
