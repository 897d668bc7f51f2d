//! Fixtures for the mock Challengermode server.
//!
//! - `auth` - access key exchange endpoints
//! - `roster` - roster payload factory and GraphQL endpoints

pub mod auth;
pub mod roster;
