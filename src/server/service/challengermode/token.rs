//! Challengermode access key cache.
//!
//! Challengermode API requests are authorized with short-lived access keys obtained by
//! exchanging a long-lived refresh key. [`TokenCache`] holds the current access key and
//! refreshes it once it expires, sharing a single in-flight refresh between all concurrent
//! callers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::server::error::auth::AuthError;

type RefreshFuture = Shared<BoxFuture<'static, Result<String, AuthError>>>;

/// Bearer access key and its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// A credential is usable until its expiry, no early refresh margin is applied.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessKeyRequest<'a> {
    refresh_key: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct AccessKeyResponse {
    value: String,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
struct TokenState {
    credential: Option<Credential>,
    /// Refresh currently in flight, cleared once it completes
    refresh: Option<RefreshFuture>,
}

struct TokenCacheInner {
    http_client: reqwest::Client,
    auth_url: String,
    refresh_key: Option<String>,
    state: Mutex<TokenState>,
}

/// Cache for the Challengermode access key.
///
/// Construct one instance at startup and share it, clones refer to the same cache. Separate
/// instances never share credentials.
#[derive(Clone)]
pub struct TokenCache {
    inner: Arc<TokenCacheInner>,
}

impl TokenCache {
    /// Creates a new instance of [`TokenCache`] without a cached credential
    ///
    /// # Arguments
    /// - `http_client` - Client used for the access key exchange
    /// - `auth_url` - Challengermode access key endpoint
    /// - `refresh_key` - Challengermode refresh key, token requests fail without one
    pub fn new(
        http_client: reqwest::Client,
        auth_url: impl Into<String>,
        refresh_key: Option<String>,
    ) -> Self {
        Self {
            inner: Arc::new(TokenCacheInner {
                http_client,
                auth_url: auth_url.into(),
                refresh_key,
                state: Mutex::new(TokenState::default()),
            }),
        }
    }

    /// Returns a valid access key, refreshing it when absent or expired.
    ///
    /// Concurrent callers arriving while a refresh is in flight await that same refresh instead
    /// of requesting another access key.
    ///
    /// # Returns
    /// - `Ok(String)` - Access key to use as bearer token
    /// - `Err(AuthError)` - No refresh key is configured or the access key exchange failed
    pub async fn get_token(&self) -> Result<String, AuthError> {
        let refresh = {
            let mut state = self.inner.state.lock().await;

            if let Some(credential) = &state.credential {
                if credential.is_valid_at(Utc::now()) {
                    return Ok(credential.value.clone());
                }
            }

            match &state.refresh {
                Some(refresh) => refresh.clone(),
                None => {
                    let refresh = Self::refresh(self.inner.clone()).boxed().shared();
                    state.refresh = Some(refresh.clone());
                    refresh
                }
            }
        };

        refresh.await
    }

    /// Currently cached credential, valid or not
    pub async fn credential(&self) -> Option<Credential> {
        self.inner.state.lock().await.credential.clone()
    }

    /// Whether a credential is cached and not yet expired
    pub async fn is_alive(&self) -> bool {
        self.credential()
            .await
            .is_some_and(|credential| credential.is_valid_at(Utc::now()))
    }

    async fn refresh(inner: Arc<TokenCacheInner>) -> Result<String, AuthError> {
        let result = inner.request_access_key().await;

        let mut state = inner.state.lock().await;
        state.refresh = None;

        match result {
            Ok(credential) => {
                let value = credential.value.clone();
                state.credential = Some(credential);

                Ok(value)
            }
            Err(err) => {
                tracing::warn!("Failed to refresh Challengermode access key: {}", err);

                Err(err)
            }
        }
    }
}

impl TokenCacheInner {
    async fn request_access_key(&self) -> Result<Credential, AuthError> {
        let refresh_key = self
            .refresh_key
            .as_deref()
            .ok_or(AuthError::MissingRefreshKey)?;

        tracing::info!("Refreshing Challengermode access key");

        let response = self
            .http_client
            .post(&self.auth_url)
            .json(&AccessKeyRequest { refresh_key })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let access_key: AccessKeyResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            expires_at = %access_key.expires_at,
            "Challengermode access key refreshed"
        );

        Ok(Credential {
            value: access_key.value,
            expires_at: access_key.expires_at,
        })
    }
}
