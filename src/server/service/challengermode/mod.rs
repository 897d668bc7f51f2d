//! Challengermode integration: access key cache, GraphQL query and roster validation.

pub mod query;
pub mod roster;
pub mod schema;
pub mod token;

pub use roster::ChallengermodeClient;
pub use token::{Credential, TokenCache};
