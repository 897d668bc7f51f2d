//! Roster processing shared by the client and the server.
//!
//! Everything in this module is pure: SteamID conversion, ELO aggregation, summary counts and
//! the bookkeeping the client needs to present lookups.

pub mod aggregate;
pub mod elo;
pub mod lookup;
pub mod steam_id;
pub mod summary;
pub mod table;
pub mod tournament_id;

pub use aggregate::{aggregate, Aggregate, RatingMap};
pub use steam_id::{to_canonical_id, FormatError, SteamId64};
