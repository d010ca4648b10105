use async_trait::async_trait;

use crate::errors::Result;

use super::groq::structs::{speech_request::SpeechRequest, speech_response::SpeechResponse};

/// Remote text-to-speech call. One request in, one audio payload out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the request and return the audio data.
    ///
    /// Implementations make a single attempt and surface any failure as-is.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse>;
}
