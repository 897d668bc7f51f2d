//! Mock Challengermode server shared by a single test.

use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{AUTH_PATH, GRAPHQL_PATH},
    error::TestError,
};

/// Test environment returned by [`TestBuilder`](crate::TestBuilder).
///
/// Holds the mock server serving both the access key and GraphQL endpoints along with the mocks
/// registered on it. Mocks are removed once the setup is dropped.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
///     .build()
///     .await?;
///
/// let cache = TokenCache::new(http_client, test.auth_url(), Some(TEST_REFRESH_KEY.to_string()));
///
/// test.assert_mocks();
/// ```
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, used in place of the Challengermode API URL
    pub fn url(&self) -> String {
        self.server.url()
    }

    pub fn auth_url(&self) -> String {
        format!("{}{}", self.server.url(), AUTH_PATH)
    }

    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.server.url(), GRAPHQL_PATH)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
