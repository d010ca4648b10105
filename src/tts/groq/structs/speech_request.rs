use serde::{Deserialize, Serialize};

use crate::errors::constants::{
    DEFAULT_MODEL, DEFAULT_RESPONSE_FORMAT, DEFAULT_TEXT, DEFAULT_VOICE,
};

/// Example:
/// ```ignore
/// SpeechRequest {
///     model: String::from("playai-tts"),
///     voice: String::from("Gail-PlayAI"),
///     input: String::from("Hello"),
///     response_format: String::from("wav")
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
    pub response_format: String,
}

impl SpeechRequest {
    pub fn new(
        model: impl Into<String>,
        voice: impl Into<String>,
        input: impl Into<String>,
        response_format: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            voice: voice.into(),
            input: input.into(),
            response_format: response_format.into(),
        }
    }
}

impl Default for SpeechRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_MODEL,
            DEFAULT_VOICE,
            DEFAULT_TEXT,
            DEFAULT_RESPONSE_FORMAT,
        )
    }
}
