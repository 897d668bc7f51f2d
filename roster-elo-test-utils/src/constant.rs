//! Placeholder values shared by all tests.
//!
//! None of these are real credentials, the mock Challengermode server only checks that requests
//! carry them back unchanged.

/// User agent of the HTTP client used against the mock server.
pub static TEST_USER_AGENT: &str = "roster-elo-tests/0.1.0";

/// Refresh key the mock access key endpoint expects in the request body.
pub static TEST_REFRESH_KEY: &str = "test_refresh_key";

/// Access key returned by the default access key endpoint.
pub static TEST_ACCESS_KEY: &str = "test_access_key";

/// Tournament queried by the default roster endpoint.
pub static TEST_TOURNAMENT_ID: &str = "9fb0e8d8-6733-49c5-3943-08dddfe5e858";

/// Path of the mock access key endpoint.
pub static AUTH_PATH: &str = "/mk1/v1/auth/access_keys";

/// Path of the mock GraphQL endpoint.
pub static GRAPHQL_PATH: &str = "/graphql";

/// Id of every team created by the roster factory.
pub static TEST_TEAM_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
