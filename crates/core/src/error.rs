use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum MoodError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
    #[error("upstream request failed: {0}")]
    UpstreamRequest(reqwest::Error),
    #[error("upstream returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
    #[error("failed to read upstream response: {0}")]
    UpstreamBody(reqwest::Error),
    #[error("failed to deserialize upstream response: {0}")]
    Deserialization(serde_json::Error),
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),
}

impl MoodError {
    /// Wrap a transport error, dropping the request URL because it carries the API key.
    pub(crate) fn request(err: reqwest::Error) -> Self {
        MoodError::UpstreamRequest(err.without_url())
    }

    pub(crate) fn body(err: reqwest::Error) -> Self {
        MoodError::UpstreamBody(err.without_url())
    }
}

pub type MoodResult<T> = std::result::Result<T, MoodError>;
