//! Service layer for integrations with external APIs.
//!
//! Services wrap the outbound HTTP calls to Challengermode, manage the access key lifecycle, and
//! validate upstream payloads before they reach the controllers.

pub mod challengermode;
