use std::path::{Path, PathBuf};

/// Error types for a synthesis run
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Speech service error: {0}")]
    Service(String),

    #[error("Failed to write audio to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpeechError {
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential(message.into())
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    pub fn persistence(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_env_var(var_name: &str) -> Self {
        Self::Credential(format!("Missing environment variable: {}", var_name))
    }
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}

impl From<toml::de::Error> for SpeechError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("Invalid TOML: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SpeechError>;

/// Constants used throughout the application
pub mod constants {
    // Configuration
    pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
    pub const API_KEY_ENV: &str = "GROQ_API_KEY";
    pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";
    pub const LOG_LEVEL_ENV: &str = "GROQ_SPEECH_LOG";

    // Service
    pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
    pub const SPEECH_ENDPOINT: &str = "/audio/speech";

    // Default request
    pub const DEFAULT_MODEL: &str = "playai-tts";
    pub const DEFAULT_VOICE: &str = "Gail-PlayAI";
    pub const DEFAULT_TEXT: &str =
        "I am working on TestLeaf Assignment week2 speech to text via Groq API";
    pub const DEFAULT_RESPONSE_FORMAT: &str = "wav";
    pub const DEFAULT_OUTPUT_PATH: &str = "speech.wav";
}
