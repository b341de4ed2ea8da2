//! # EchoRoom Core
//!
//! Mood classification logic for the EchoRoom journal.
//!
//! This crate contains everything needed to turn a journal entry into a one-word mood label:
//! - The closed mood vocabulary ([`Mood`])
//! - Prompt construction with the entry delimited from the instruction
//! - The Gemini `generateContent` client and response extraction
//! - [`MoodClassifier`], which ties the above together behind a bounded timeout
//!
//! **No API concerns**: HTTP routing, CORS and OpenAPI belong in `api-rest` and `api-shared`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod gemini;
pub mod mood;
pub mod prompt;

pub use classifier::MoodClassifier;
pub use config::{ApiKey, CoreConfig};
pub use constants::DEFAULT_MOOD;
pub use error::{MoodError, MoodResult};
pub use gemini::{extract_mood, GeminiClient, GenerateContentResponse, TextGenerator};
pub use mood::Mood;
pub use prompt::build_prompt;
