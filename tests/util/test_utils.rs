//! Builds application components pointed at the mock Challengermode server.

use roster_elo::server::{
    config::{Config, RuntimeMode},
    model::app::AppState,
    service::challengermode::TokenCache,
    startup,
};
use roster_elo_test_utils::{
    constant::{TEST_REFRESH_KEY, TEST_USER_AGENT},
    TestSetup,
};

/// Extension trait for TestSetup to create application components using the mock server
pub trait TestSetupExt {
    fn config(&self, refresh_key: Option<&str>, mode: RuntimeMode) -> Config;

    fn http_client(&self) -> reqwest::Client;

    /// Token cache configured with the test refresh key
    fn token_cache(&self) -> TokenCache;

    /// App state in development mode configured with the test refresh key
    fn app_state(&self) -> AppState {
        self.app_state_with(Some(TEST_REFRESH_KEY), RuntimeMode::Development)
    }

    fn app_state_with(&self, refresh_key: Option<&str>, mode: RuntimeMode) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn config(&self, refresh_key: Option<&str>, mode: RuntimeMode) -> Config {
        Config {
            challengermode_refresh_key: refresh_key.map(str::to_string),
            challengermode_api_url: self.url(),
            user_agent: TEST_USER_AGENT.to_string(),
            mode,
        }
    }

    fn http_client(&self) -> reqwest::Client {
        let config = self.config(None, RuntimeMode::Development);

        startup::build_http_client(&config).expect("Failed to build HTTP client")
    }

    fn token_cache(&self) -> TokenCache {
        TokenCache::new(
            self.http_client(),
            self.auth_url(),
            Some(TEST_REFRESH_KEY.to_string()),
        )
    }

    fn app_state_with(&self, refresh_key: Option<&str>, mode: RuntimeMode) -> AppState {
        let config = self.config(refresh_key, mode);

        startup::build_app_state(&config, self.http_client())
    }
}
