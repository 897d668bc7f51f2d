use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    service::challengermode::{ChallengermodeClient, TokenCache},
};

/// Build the HTTP client used for all outbound Challengermode requests
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let http_client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;

    Ok(http_client)
}

/// Build the application state, creating the process-wide access key cache
pub fn build_app_state(config: &Config, http_client: reqwest::Client) -> AppState {
    let token_cache = TokenCache::new(
        http_client.clone(),
        config.auth_url(),
        config.challengermode_refresh_key.clone(),
    );

    let challengermode = ChallengermodeClient::new(http_client, config.graphql_url(), token_cache);

    AppState {
        challengermode,
        mode: config.mode,
    }
}
