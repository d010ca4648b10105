// Public API for the groq-speech library

pub mod config;
pub mod errors;
pub mod trace;
pub mod tts;

use std::path::Path;

// Re-export commonly used types
pub use errors::{Result, SpeechError};
pub use tts::{
    groq::{
        groq::GroqTTS,
        structs::{speech_request::SpeechRequest, speech_response::SpeechResponse},
    },
    invoker::SynthesisInvoker,
    synthesizer::SpeechSynthesizer,
};

/// Synthesize `request` against the Groq speech endpoint with `credential`
/// and write the audio to `output_path`.
pub async fn synthesize_and_save(
    credential: &str,
    request: &SpeechRequest,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let client = GroqTTS::new(credential)?;
    SynthesisInvoker::new(client)
        .synthesize_and_save(request, output_path)
        .await
}
