//! Data transfer objects shared between the server API and the web client.

pub mod api;
pub mod faceit;
pub mod roster;
