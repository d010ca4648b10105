use std::path::Path;

use tracing::info;

use crate::errors::{Result, SpeechError};

use super::{groq::structs::speech_request::SpeechRequest, synthesizer::SpeechSynthesizer};

/// Runs one synthesis and persists the audio.
#[derive(Debug)]
pub struct SynthesisInvoker<S> {
    synthesizer: S,
}

impl<S: SpeechSynthesizer> SynthesisInvoker<S> {
    pub fn new(synthesizer: S) -> Self {
        Self { synthesizer }
    }

    /// Synthesize `request` and write the audio to `output_path`.
    ///
    /// An existing file is overwritten. Missing parent directories are not
    /// created, and nothing is written when the synthesis call fails.
    ///
    /// Example:
    /// ```ignore
    /// let invoker = SynthesisInvoker::new(GroqTTS::new(api_key)?);
    /// invoker.synthesize_and_save(&SpeechRequest::default(), "speech.wav").await?;
    /// ```
    #[tracing::instrument(skip(self, request, output_path), fields(path = %output_path.as_ref().display()))]
    pub async fn synthesize_and_save(
        &self,
        request: &SpeechRequest,
        output_path: impl AsRef<Path>,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        let response = self.synthesizer.synthesize(request).await?;

        tokio::fs::write(output_path, &response.audio)
            .await
            .map_err(|source| SpeechError::persistence(output_path, source))?;

        info!(
            bytes = response.len(),
            format = %request.response_format,
            "Saved synthesized audio"
        );

        Ok(())
    }
}
