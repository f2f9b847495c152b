//! Supported Models
//!
//! Single source of truth for the model allow-list. The gateway validates
//! against it and publishes it at `/api/models`; the console compiles it in
//! as a fallback for when that endpoint is unreachable.

use serde::{Deserialize, Serialize};

/// Groq model identifiers the gateway accepts
pub const SUPPORTED_MODELS: [&str; 3] = [
    "llama-3.3-70b-versatile",
    "mixtral-8x7b-32768",
    "gemma2-9b-it",
];

/// Model preselected in the console
pub const DEFAULT_MODEL: &str = SUPPORTED_MODELS[0];

/// Exact, case-sensitive allow-list check
pub fn is_supported(model_name: &str) -> bool {
    SUPPORTED_MODELS.contains(&model_name)
}

/// Body of `GET /api/models`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelList {
    pub models: Vec<String>,
}

impl Default for ModelList {
    fn default() -> Self {
        Self {
            models: SUPPORTED_MODELS.iter().map(ToString::to_string).collect(),
        }
    }
}
