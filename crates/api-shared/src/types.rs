//! Request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /analyze-mood`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMoodReq {
    /// Journal entry to classify.
    #[schema(example = "I feel like giving up today")]
    pub text: String,
}

/// Successful classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMoodRes {
    /// Label returned by the model, trimmed, or `Neutral`.
    #[schema(example = "Depressed")]
    pub mood: String,
}

/// Failed classification. `mood` is always the fallback so clients can render it unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMoodErrorRes {
    pub error: String,
    #[schema(example = "Neutral")]
    pub mood: String,
}

/// Vocabulary offered to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListMoodsRes {
    pub moods: Vec<String>,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
