use std::fmt;

use crate::server::error::config::ConfigError;

/// Default Challengermode public API base URL
pub static DEFAULT_CHALLENGERMODE_API_URL: &str = "https://publicapi.challengermode.com";
/// Default user agent for outbound requests
pub static DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Runtime mode of the server, controls access to development-only endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Development for debug builds, production for release builds
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvValue {
                var: "APP_ENV".to_string(),
                reason: format!(
                    "expected \"development\" or \"production\", got {:?}",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Challengermode refresh key, only required once a token is needed
    pub challengermode_refresh_key: Option<String>,
    pub challengermode_api_url: String,
    pub user_agent: String,
    pub mode: RuntimeMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match optional_var("APP_ENV")? {
            Some(value) => RuntimeMode::parse(&value)?,
            None => RuntimeMode::from_build(),
        };

        Ok(Self {
            challengermode_refresh_key: optional_var("CHALLENGERMODE_REFRESH_KEY")?,
            challengermode_api_url: optional_var("CHALLENGERMODE_API_URL")?
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_CHALLENGERMODE_API_URL.to_string()),
            user_agent: optional_var("USER_AGENT")?
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            mode,
        })
    }

    /// Challengermode GraphQL endpoint
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.challengermode_api_url)
    }

    /// Challengermode access key exchange endpoint
    pub fn auth_url(&self) -> String {
        format!("{}/mk1/v1/auth/access_keys", self.challengermode_api_url)
    }
}

/// Reads an environment variable, treating unset and empty values as absent.
fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
