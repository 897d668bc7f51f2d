//! HTTP controller endpoints for the web API.
//!
//! Controllers validate request parameters, call into the service layer and return the
//! appropriate HTTP responses. Endpoints are documented with utoipa for the OpenAPI document.

pub mod challengermode;
