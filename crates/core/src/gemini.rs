//! Gemini `generateContent` client and response extraction.
//!
//! Only the non-streaming request/response API is used. Requests carry a single prompt part;
//! responses are read leniently so that a missing or `null` field anywhere along
//! `candidates[0].content.parts[0].text` degrades to the fallback mood instead of an error.

use crate::config::{ApiKey, CoreConfig};
use crate::constants::DEFAULT_MOOD;
use crate::{MoodError, MoodResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// A request whose only content is `prompt`.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// The subset of a `generateContent` response the classifier reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if every level is present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
    }
}

/// Trimmed first-candidate text, or [`DEFAULT_MOOD`] when it is absent or blank.
pub fn extract_mood(response: &GenerateContentResponse) -> String {
    response
        .first_text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(DEFAULT_MOOD)
        .to_string()
}

/// One call to an upstream text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> MoodResult<GenerateContentResponse>;
}

/// Google Gemini API client.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: ApiKey,
}

impl GeminiClient {
    pub fn new(cfg: &CoreConfig) -> MoodResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(MoodError::HttpClient)?;
        Ok(Self {
            http,
            url: cfg.generate_content_url(),
            api_key: cfg.api_key().clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> MoodResult<GenerateContentResponse> {
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.expose())])
            .json(&request)
            .send()
            .await
            .map_err(MoodError::request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(MoodError::body)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Gemini response received");

        if !status.is_success() {
            return Err(MoodError::UpstreamStatus {
                status: status.as_u16(),
                message: upstream_error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").into()),
            });
        }

        serde_json::from_slice(&body).map_err(MoodError::Deserialization)
    }
}

/// Google error bodies look like `{"error": {"code": 400, "message": "...", "status": "..."}}`.
fn upstream_error_message(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
}
