//! Tests for the development-only get_token endpoint.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use roster_elo::server::{config::RuntimeMode, controller::challengermode::get_token};
use roster_elo_test_utils::constant::{TEST_ACCESS_KEY, TEST_REFRESH_KEY};

use super::*;

/// Tests that the access key is returned as plain text in development mode.
///
/// Expected: 200 OK with the access key as body
#[tokio::test]
async fn returns_access_key_in_development() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;

    let result = get_token(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], TEST_ACCESS_KEY.as_bytes());
    test.assert_mocks();

    Ok(())
}

/// Tests that the endpoint is disabled outside of development mode.
///
/// Expected: 403 Forbidden with a plain text message and no access key request
#[tokio::test]
async fn forbidden_in_production() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 0)
        .build()
        .await?;
    let state = test.app_state_with(Some(TEST_REFRESH_KEY), RuntimeMode::Production);

    let result = get_token(State(state)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        &body[..],
        b"This endpoint is only available in development mode."
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that a missing refresh key is reported as a server error.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn fails_without_refresh_key() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state_with(None, RuntimeMode::Development);

    let result = get_token(State(state)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
