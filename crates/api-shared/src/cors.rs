//! Cross-origin header values.
//!
//! The journal page calls the API from a different origin, so every response (success, failure
//! and preflight alike) carries the same permissive pair of headers.

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Content type of every body the API produces.
pub const JSON_CONTENT_TYPE: &str = "application/json";
