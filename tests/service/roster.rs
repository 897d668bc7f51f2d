//! Tests for the Challengermode roster client.
//!
//! Verifies bearer authorization, roster parsing, error surfacing of GraphQL errors and schema
//! validation of the response payload.

use chrono::{Duration, Utc};
use roster_elo::{
    roster::{aggregate, summary::RosterSummary, to_canonical_id, RatingMap},
    server::error::{auth::AuthError, Error},
};
use roster_elo_test_utils::constant::{TEST_ACCESS_KEY, TEST_TOURNAMENT_ID};
use serde_json::json;
use uuid::Uuid;

use super::*;

fn tournament_id() -> Uuid {
    Uuid::parse_str(TEST_TOURNAMENT_ID).unwrap()
}

/// Tests fetching a roster with one team lineup and one group lineup.
///
/// Expected: Ok with both lineups and their members
#[tokio::test]
async fn fetches_roster() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .with_roster_endpoint(factory::mock_roster_data(), 1)
        .build()
        .await?;
    let state = test.app_state();

    let roster = state
        .challengermode
        .fetch_roster(tournament_id())
        .await
        .unwrap();

    let attendance = &roster.tournament.attendance;
    assert_eq!(roster.tournament.name, "Test Cup");
    assert_eq!(attendance.roster.lineups.len(), 1);
    assert_eq!(attendance.signups.lineups.len(), 1);

    let team = &attendance.roster.lineups[0];
    assert!(team.is_team());
    assert_eq!(team.captain().unwrap().user.username, "captain");
    assert!(!attendance.signups.lineups[0].is_team());
    test.assert_mocks();

    Ok(())
}

/// Tests the roster summary and aggregation over a fetched roster.
///
/// Expected: counts of one team, one group and five players, ratings aggregated per lineup
#[tokio::test]
async fn summarizes_fetched_roster() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .with_roster_endpoint(factory::mock_roster_data(), 1)
        .build()
        .await?;
    let state = test.app_state();

    let roster = state
        .challengermode
        .fetch_roster(tournament_id())
        .await
        .unwrap();
    let summary = RosterSummary::from_roster(&roster);

    assert_eq!(summary.teams_count, 1);
    assert_eq!(summary.groups_count, 1);
    assert_eq!(summary.lineups_count, 2);
    assert_eq!(summary.team_players_count, 2);
    assert_eq!(summary.group_players_count, 3);
    assert_eq!(summary.players_count, 5);

    let ratings: RatingMap = [
        (to_canonical_id("[U:1:1075413651]").unwrap(), Some(2150.7)),
        (to_canonical_id("[U:1:22202]").unwrap(), None),
    ]
    .into_iter()
    .collect();
    let team = aggregate(&roster.tournament.attendance.roster.lineups[0], &ratings);

    assert_eq!(team.member_count, 2);
    assert_eq!(team.rated_count, 1);
    assert_eq!(team.mean, Some(2150));
    assert_eq!(team.sum, 2150);
    test.assert_mocks();

    Ok(())
}

/// Tests that the cached access key is reused across roster queries.
///
/// Expected: one access key request for two roster requests
#[tokio::test]
async fn reuses_access_key_across_queries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .with_roster_endpoint(factory::mock_roster_data(), 2)
        .build()
        .await?;
    let state = test.app_state();

    assert!(state.challengermode.fetch_roster(tournament_id()).await.is_ok());
    assert!(state.challengermode.fetch_roster(tournament_id()).await.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests that GraphQL errors are surfaced even with a 200 status.
///
/// Expected: Err with Error::QueryError carrying the upstream message
#[tokio::test]
async fn fails_on_graphql_errors_with_ok_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;
    let body = factory::graphql_errors(&["Tournament not found"]).to_string();
    let mock = test.roster().create_graphql_raw_endpoint(200, &body, 1);
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    match result {
        Err(Error::QueryError(err)) => {
            assert_eq!(err.messages, vec!["Tournament not found".to_string()]);
        }
        other => panic!("expected QueryError, got {:?}", other.map(|_| ())),
    }
    mock.assert();
    test.assert_mocks();

    Ok(())
}

/// Tests that a non-success status without GraphQL errors is a query error.
///
/// Expected: Err with Error::QueryError carrying status and body
#[tokio::test]
async fn fails_on_non_success_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;
    let mock = test
        .roster()
        .create_graphql_raw_endpoint(503, "Service Unavailable", 1);
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    match result {
        Err(Error::QueryError(err)) => {
            assert_eq!(err.messages, vec!["HTTP 503: Service Unavailable".to_string()]);
        }
        other => panic!("expected QueryError, got {:?}", other.map(|_| ())),
    }
    mock.assert();

    Ok(())
}

/// Tests that a payload not matching the roster schema reports the offending path.
///
/// Expected: Err with Error::ValidationError at the first mismatching field
#[tokio::test]
async fn fails_on_schema_mismatch() -> Result<(), TestError> {
    let mut data = factory::mock_roster_data();
    data["tournament"]["attendance"]["roster"]["lineups"][0]["members"][1]["captain"] =
        json!("no");

    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .with_roster_endpoint(data, 1)
        .build()
        .await?;
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(
                err.path,
                "tournament.attendance.roster.lineups[0].members[1].captain"
            );
        }
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
    test.assert_mocks();

    Ok(())
}

/// Tests that team ids must be UUIDs.
///
/// Expected: Err with Error::ValidationError at the team id
#[tokio::test]
async fn fails_on_invalid_team_id() -> Result<(), TestError> {
    let mut data = factory::mock_roster_data();
    data["tournament"]["attendance"]["roster"]["lineups"][0]["team"]["id"] = json!("team-1");

    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .with_roster_endpoint(data, 1)
        .build()
        .await?;
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.path, "tournament.attendance.roster.lineups[0].team.id");
        }
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
    test.assert_mocks();

    Ok(())
}

/// Tests that a lineup without the nullable `team` key is rejected rather than read as a group.
///
/// Expected: Err with Error::ValidationError at the missing team key
#[tokio::test]
async fn fails_on_missing_team_key() -> Result<(), TestError> {
    let mut data = factory::mock_roster_data();
    data["tournament"]["attendance"]["signups"]["lineups"][0]
        .as_object_mut()
        .unwrap()
        .remove("team");

    let test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .with_roster_endpoint(data, 1)
        .build()
        .await?;
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.path, "tournament.attendance.signups.lineups[0].team");
            assert_eq!(err.reason, "missing field");
        }
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
    test.assert_mocks();

    Ok(())
}

/// Tests that a null `data` payload without errors is rejected.
///
/// Expected: Err with Error::ValidationError at `data`
#[tokio::test]
async fn fails_on_missing_data() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_access_key_endpoint(TEST_ACCESS_KEY, Utc::now() + Duration::hours(1), 1)
        .build()
        .await?;
    let mock = test
        .roster()
        .create_graphql_raw_endpoint(200, r#"{"data":null}"#, 1);
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    match result {
        Err(Error::ValidationError(err)) => assert_eq!(err.path, "data"),
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
    mock.assert();

    Ok(())
}

/// Tests that no roster query is sent when the access key cannot be acquired.
///
/// Expected: Err with Error::AuthError and no GraphQL request
#[tokio::test]
async fn fails_when_access_key_unavailable() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_endpoint(factory::mock_roster_data(), 0)
        .build()
        .await?;
    let auth_mock = test
        .auth()
        .create_access_key_raw_endpoint(401, "invalid refresh key", 1);
    let state = test.app_state();

    let result = state.challengermode.fetch_roster(tournament_id()).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::Rejected { status: 401, .. }))
    ));
    auth_mock.assert();
    test.assert_mocks();

    Ok(())
}
