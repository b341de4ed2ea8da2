//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Request
//! handling never reads process-wide environment variables, and the upstream credential is never
//! compiled into the binary.

use crate::constants::{
    DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
    ENV_GEMINI_API_BASE, ENV_GEMINI_API_KEY, ENV_GEMINI_MODEL, ENV_MOOD_TIMEOUT_SECS,
};
use crate::{MoodError, MoodResult};
use std::fmt;
use std::time::Duration;

/// Upstream API key. The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> MoodResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(MoodError::InvalidConfig("API key cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    api_key: ApiKey,
    api_base: String,
    model: String,
    request_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// A trailing slash on `api_base` is removed so that model URLs can be joined with `/`.
    pub fn new(
        api_key: ApiKey,
        api_base: String,
        model: String,
        request_timeout: Duration,
    ) -> MoodResult<Self> {
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(MoodError::InvalidConfig(format!(
                "API base must be an http(s) URL, got {api_base:?}"
            )));
        }

        let model = model.trim().to_string();
        if model.is_empty() || model.contains('/') {
            return Err(MoodError::InvalidConfig(format!(
                "model name is not valid: {model:?}"
            )));
        }

        if request_timeout.is_zero() {
            return Err(MoodError::InvalidConfig(
                "request timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            api_key,
            api_base,
            model,
            request_timeout,
        })
    }

    /// Resolve configuration from the process environment.
    ///
    /// Call this once at startup. `GEMINI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> MoodResult<Self> {
        Self::new(
            api_key_from_env_value(std::env::var(ENV_GEMINI_API_KEY).ok())?,
            api_base_from_env_value(std::env::var(ENV_GEMINI_API_BASE).ok()),
            model_from_env_value(std::env::var(ENV_GEMINI_MODEL).ok()),
            request_timeout_from_env_value(std::env::var(ENV_MOOD_TIMEOUT_SECS).ok())?,
        )
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Full `generateContent` endpoint for the configured model, without the key parameter.
    pub fn generate_content_url(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the API key from an optional string value. A missing or blank key is an error.
pub fn api_key_from_env_value(value: Option<String>) -> MoodResult<ApiKey> {
    match non_blank(value) {
        Some(key) => ApiKey::new(key),
        None => Err(MoodError::InvalidConfig(format!(
            "{ENV_GEMINI_API_KEY} is not set"
        ))),
    }
}

pub fn api_base_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.into())
}

pub fn model_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into())
}

/// Parse the upstream timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn request_timeout_from_env_value(value: Option<String>) -> MoodResult<Duration> {
    let secs = match non_blank(value) {
        Some(v) => v.parse::<u64>().map_err(|_| {
            MoodError::InvalidConfig(format!(
                "{ENV_MOOD_TIMEOUT_SECS} must be a whole number of seconds, got {v:?}"
            ))
        })?,
        None => DEFAULT_REQUEST_TIMEOUT_SECS,
    };

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let cfg = CoreConfig::new(
            key(),
            "http://localhost:8080/v1beta/models/".into(),
            "gemini-pro".into(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(cfg.api_base(), "http://localhost:8080/v1beta/models");
        assert_eq!(
            cfg.generate_content_url(),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_new_rejects_non_http_base() {
        let result = CoreConfig::new(
            key(),
            "ftp://example.com".into(),
            "gemini-pro".into(),
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(MoodError::InvalidConfig(_))));
    }

    #[test]
    fn test_new_rejects_bad_model() {
        for model in ["", "  ", "models/gemini-pro"] {
            let result = CoreConfig::new(
                key(),
                DEFAULT_GEMINI_API_BASE.into(),
                model.into(),
                Duration::from_secs(5),
            );
            assert!(matches!(result, Err(MoodError::InvalidConfig(_))), "{model:?}");
        }
    }

    #[test]
    fn test_new_rejects_zero_timeout() {
        let result = CoreConfig::new(
            key(),
            DEFAULT_GEMINI_API_BASE.into(),
            DEFAULT_GEMINI_MODEL.into(),
            Duration::ZERO,
        );
        assert!(matches!(result, Err(MoodError::InvalidConfig(_))));
    }

    #[test]
    fn test_api_key_required() {
        assert!(api_key_from_env_value(None).is_err());
        assert!(api_key_from_env_value(Some("   ".into())).is_err());
        let key = api_key_from_env_value(Some(" abc ".into())).unwrap();
        assert_eq!(key.expose(), "abc");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let cfg = CoreConfig::new(
            ApiKey::new("super-secret").unwrap(),
            DEFAULT_GEMINI_API_BASE.into(),
            DEFAULT_GEMINI_MODEL.into(),
            Duration::from_secs(1),
        )
        .unwrap();

        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(api_base_from_env_value(None), DEFAULT_GEMINI_API_BASE);
        assert_eq!(model_from_env_value(Some(" ".into())), DEFAULT_GEMINI_MODEL);
        assert_eq!(
            request_timeout_from_env_value(None).unwrap(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_request_timeout_parsing() {
        assert_eq!(
            request_timeout_from_env_value(Some("30".into())).unwrap(),
            Duration::from_secs(30)
        );
        assert!(request_timeout_from_env_value(Some("soon".into())).is_err());
        assert!(request_timeout_from_env_value(Some("-1".into())).is_err());
    }
}
