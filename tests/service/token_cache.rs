//! Tests for the Challengermode access key cache.
//!
//! Verifies credential reuse while valid, refreshes once expired, single-flight refreshes under
//! concurrency and error mapping of failed access key exchanges.

use chrono::{Duration, TimeZone, Utc};
use futures::future::join_all;
use roster_elo::server::{error::auth::AuthError, service::challengermode::TokenCache};
use roster_elo_test_utils::constant::{AUTH_PATH, TEST_ACCESS_KEY};

use super::*;

/// Tests that a valid access key is reused.
///
/// Expected: the access key endpoint is called once for two token requests
#[tokio::test]
async fn reuses_valid_access_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;
    let cache = test.token_cache();

    let first = cache.get_token().await;
    let second = cache.get_token().await;

    assert_eq!(first, Ok(TEST_ACCESS_KEY.to_string()));
    assert_eq!(second, Ok(TEST_ACCESS_KEY.to_string()));
    assert!(cache.is_alive().await);
    test.assert_mocks();

    Ok(())
}

/// Tests that the refreshed credential replaces value and expiry together.
///
/// Expected: the cached credential holds the returned access key and expiry
#[tokio::test]
async fn stores_returned_credential() -> Result<(), TestError> {
    let expires_at = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, expires_at, 1)
        .build()
        .await?;
    let cache = test.token_cache();

    assert!(cache.credential().await.is_none());
    assert!(!cache.is_alive().await);

    cache.get_token().await.unwrap();

    let credential = cache.credential().await.unwrap();
    assert_eq!(credential.value, TEST_ACCESS_KEY);
    assert_eq!(credential.expires_at, expires_at);
    test.assert_mocks();

    Ok(())
}

/// Tests that an expired access key is never reused.
///
/// The endpoint hands out access keys which already expired, so every request refreshes.
///
/// Expected: the access key endpoint is called once per token request
#[tokio::test]
async fn refreshes_expired_access_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() - Duration::minutes(1), 2)
        .build()
        .await?;
    let cache = test.token_cache();

    assert!(cache.get_token().await.is_ok());
    assert!(!cache.is_alive().await);
    assert!(cache.get_token().await.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests that concurrent callers share a single refresh.
///
/// Expected: all callers receive the same access key from one access key request
#[tokio::test]
async fn concurrent_callers_share_single_refresh() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;
    let cache = test.token_cache();

    let requests = (0..10).map(|_| {
        let cache = cache.clone();
        async move { cache.get_token().await }
    });
    let results = join_all(requests).await;

    assert_eq!(results.len(), 10);
    for result in results {
        assert_eq!(result, Ok(TEST_ACCESS_KEY.to_string()));
    }
    test.assert_mocks();

    Ok(())
}

/// Tests that concurrent callers all observe a shared refresh failure.
///
/// Expected: every caller receives the same error from one access key request
#[tokio::test]
async fn concurrent_callers_share_refresh_failure() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .auth()
        .create_access_key_raw_endpoint(401, "invalid refresh key", 1);
    let cache = test.token_cache();

    let results = join_all((0..5).map(|_| cache.get_token())).await;

    for result in results {
        assert_eq!(
            result,
            Err(AuthError::Rejected {
                status: 401,
                body: "invalid refresh key".to_string(),
            })
        );
    }
    mock.assert();

    Ok(())
}

/// Tests that a rejected access key request carries the response body.
///
/// Expected: Err with AuthError::Rejected holding status and body
#[tokio::test]
async fn fails_when_refresh_key_rejected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .auth()
        .create_access_key_raw_endpoint(403, r#"{"message":"Forbidden"}"#, 1);
    let cache = test.token_cache();

    let result = cache.get_token().await;

    assert_eq!(
        result,
        Err(AuthError::Rejected {
            status: 403,
            body: r#"{"message":"Forbidden"}"#.to_string(),
        })
    );
    assert!(cache.credential().await.is_none());
    mock.assert();

    Ok(())
}

/// Tests that access key responses missing a field are rejected.
///
/// Expected: Err with AuthError::MalformedResponse
#[tokio::test]
async fn fails_when_response_missing_expiry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .auth()
        .create_access_key_raw_endpoint(200, r#"{"value":"token"}"#, 1);
    let cache = test.token_cache();

    let result = cache.get_token().await;

    assert!(matches!(result, Err(AuthError::MalformedResponse(_))));
    mock.assert();

    Ok(())
}

/// Tests that access key responses with unexpected fields are rejected.
///
/// Expected: Err with AuthError::MalformedResponse
#[tokio::test]
async fn fails_when_response_has_unknown_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.auth().create_access_key_raw_endpoint(
        200,
        r#"{"value":"token","expiresAt":"2999-01-01T00:00:00Z","scope":"admin"}"#,
        1,
    );
    let cache = test.token_cache();

    let result = cache.get_token().await;

    assert!(matches!(result, Err(AuthError::MalformedResponse(_))));
    mock.assert();

    Ok(())
}

/// Tests that a failed refresh does not block the next one.
///
/// The first access key request fails, the second succeeds.
///
/// Expected: Err for the first token request, Ok for the second
#[tokio::test]
async fn retries_after_failed_refresh() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", AUTH_PATH)
                .with_status(500)
                .with_body("upstream unavailable")
                .expect(1)
                .create()
        })
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;
    let cache = test.token_cache();

    let first = cache.get_token().await;
    let second = cache.get_token().await;

    assert!(matches!(first, Err(AuthError::Rejected { status: 500, .. })));
    assert_eq!(second, Ok(TEST_ACCESS_KEY.to_string()));
    test.assert_mocks();

    Ok(())
}

/// Tests that token requests fail without a refresh key.
///
/// Expected: Err with AuthError::MissingRefreshKey and no access key request
#[tokio::test]
async fn fails_without_refresh_key() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .auth()
        .create_access_key_raw_endpoint(200, r#"{"value":"token"}"#, 0);
    let cache = TokenCache::new(test.http_client(), test.auth_url(), None);

    let result = cache.get_token().await;

    assert_eq!(result, Err(AuthError::MissingRefreshKey));
    mock.assert();

    Ok(())
}

/// Tests that separately constructed caches never share credentials.
///
/// Expected: each cache performs its own access key request
#[tokio::test]
async fn separate_caches_are_isolated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 2)
        .build()
        .await?;

    let first = test.token_cache();
    let second = test.token_cache();

    assert!(first.get_token().await.is_ok());
    assert!(second.credential().await.is_none());
    assert!(second.get_token().await.is_ok());
    test.assert_mocks();

    Ok(())
}
