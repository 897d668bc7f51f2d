//! Server application models and type definitions.
//!
//! This module contains the application state shared with every axum handler.

pub mod app;
