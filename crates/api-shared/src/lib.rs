//! # API Shared
//!
//! Shared definitions for the EchoRoom HTTP API.
//!
//! Contains:
//! - Request/response bodies with OpenAPI schemas (`types` module)
//! - Cross-origin header values every response carries (`cors` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `echoroom-run` server binary.

pub mod cors;
pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
