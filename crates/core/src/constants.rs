//! Constants used throughout the EchoRoom core crate.

/// Label returned whenever no usable mood could be obtained.
pub const DEFAULT_MOOD: &str = "Neutral";

/// Base URL of the Gemini models API, without a trailing slash.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for mood classification when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Upper bound on a single upstream call, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Environment variable holding the Gemini API key.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable overriding [`DEFAULT_GEMINI_API_BASE`].
pub const ENV_GEMINI_API_BASE: &str = "GEMINI_API_BASE";

/// Environment variable overriding [`DEFAULT_GEMINI_MODEL`].
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";

/// Environment variable overriding [`DEFAULT_REQUEST_TIMEOUT_SECS`].
pub const ENV_MOOD_TIMEOUT_SECS: &str = "MOOD_TIMEOUT_SECS";

/// Opening marker placed before the journal entry inside the prompt.
pub const ENTRY_OPEN: &str = "<entry>";

/// Closing marker placed after the journal entry inside the prompt.
pub const ENTRY_CLOSE: &str = "</entry>";
