//! Challengermode tournament roster viewer with FACEIT ELO statistics.
//!
//! The `model` and `roster` modules are shared between the WASM client and the server, the
//! `server` module contains the axum backend that talks to the Challengermode API.

pub mod model;
pub mod roster;

#[cfg(feature = "server")]
pub mod server;
