//! Server application core modules.
//!
//! This module contains the axum backend: configuration, the Challengermode access key cache
//! and roster client, HTTP controllers, and the OpenAPI documented router that is merged into
//! the Dioxus fullstack router.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
