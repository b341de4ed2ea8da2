//! Journal entry to mood label.

use crate::gemini::{extract_mood, GeminiClient, TextGenerator};
use crate::prompt::build_prompt;
use crate::{CoreConfig, Mood, MoodError, MoodResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Classifies journal entries with one upstream call each.
///
/// Cheap to clone; clones share the underlying generator and its connection pool.
#[derive(Clone)]
pub struct MoodClassifier {
    generator: Arc<dyn TextGenerator>,
    request_timeout: Duration,
}

impl MoodClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>, request_timeout: Duration) -> Self {
        Self {
            generator,
            request_timeout,
        }
    }

    /// Classifier backed by the Gemini API described by `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> MoodResult<Self> {
        let client = GeminiClient::new(cfg)?;
        Ok(Self::new(Arc::new(client), cfg.request_timeout()))
    }

    /// Classify `text`, returning the model's trimmed one-word answer.
    ///
    /// Any text, blank included, is forwarded. A response that lacks candidate text yields
    /// [`crate::DEFAULT_MOOD`]; only transport, status, timeout and decoding failures are
    /// errors. The label is not checked against the vocabulary.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the upstream call fails or exceeds the request timeout,
    /// - upstream answers with a non-success status, or
    /// - the response body is not valid JSON of the expected shape.
    pub async fn classify(&self, text: &str) -> MoodResult<String> {
        let request_id = Uuid::new_v4();

        let prompt = build_prompt(text);
        let started = Instant::now();

        let response =
            match tokio::time::timeout(self.request_timeout, self.generator.generate(&prompt))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    warn!(%request_id, timeout = ?self.request_timeout, "Mood classification timed out");
                    return Err(MoodError::Timeout(self.request_timeout));
                }
            };

        let mood = extract_mood(&response);
        let recognised = mood.parse::<Mood>().is_ok();

        info!(
            %request_id,
            text_len = text.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            mood = %mood,
            recognised,
            "Classified journal entry"
        );

        Ok(mood)
    }
}
