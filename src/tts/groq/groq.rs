use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::errors::{constants::*, Result, SpeechError};
use crate::tts::{
    groq::structs::{
        error_response::ErrorResponse, speech_request::SpeechRequest,
        speech_response::SpeechResponse,
    },
    synthesizer::SpeechSynthesizer,
};

#[derive(Clone)]
pub struct GroqTTS {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl fmt::Debug for GroqTTS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqTTS")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GroqTTS {
    /// Create a client for the public Groq endpoint.
    ///
    /// A blank credential is rejected here, before any request is made.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SpeechError::credential(format!(
                "API key is empty; set {}",
                API_KEY_ENV
            )));
        }

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SPEECH_ENDPOINT)
    }

    /// Synthesize text to speech and return the audio data.
    ///
    /// Example:
    /// ```ignore
    /// let tts = GroqTTS::new(api_key)?;
    /// let response = tts.synthesize(&SpeechRequest {
    ///     model: String::from("playai-tts"),
    ///     voice: String::from("Gail-PlayAI"),
    ///     input: String::from("test"),
    ///     response_format: String::from("wav")
    /// }).await?;
    /// ```
    #[tracing::instrument(skip(self, request), fields(model = %request.model, voice = %request.voice))]
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = ErrorResponse::detail_from_body(&response.text().await.unwrap_or_default());
            warn!(%status, %detail, "Speech request rejected");

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    SpeechError::credential(format!("{}: {}", status, detail))
                }
                _ => SpeechError::service(format!("{}: {}", status, detail)),
            });
        }

        let audio = response.bytes().await?;
        debug!(bytes = audio.len(), "Received audio");

        Ok(SpeechResponse::new(audio))
    }
}

#[async_trait]
impl SpeechSynthesizer for GroqTTS {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        GroqTTS::synthesize(self, request).await
    }
}
