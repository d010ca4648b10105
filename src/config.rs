use std::{env, fmt, path::Path};

use serde::Deserialize;

use crate::errors::{constants::*, Result, SpeechError};

#[derive(Deserialize, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Load `./config.toml`, falling back to the process environment when the
    /// file is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(config) => Self::from_toml(&config),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(err) => Err(SpeechError::config(format!(
                "Cannot read {}: {}",
                path.as_ref().display(),
                err
            ))),
        }
    }

    pub fn from_toml(config: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(config)?)
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| SpeechError::missing_env_var(API_KEY_ENV))?;

        Ok(Config {
            api_key,
            base_url: env::var(BASE_URL_ENV).ok(),
            log_level: env::var(LOG_LEVEL_ENV).ok(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        env::remove_var(API_KEY_ENV);
        env::remove_var(BASE_URL_ENV);
        env::remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            api_key = "gsk_test"
            base_url = "http://localhost:8080/openai/v1"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(config.base_url(), "http://localhost:8080/openai/v1");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_from_toml_missing_api_key() {
        let result = Config::from_toml(r#"log_level = "debug""#);
        assert!(matches!(result, Err(SpeechError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_toml(r#"api_key = "gsk_secret""#).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var(API_KEY_ENV, "gsk_env");
        env::set_var(LOG_LEVEL_ENV, "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "gsk_env");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.log_level.as_deref(), Some("debug"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_credential() {
        clear_env();

        let result = Config::from_env();
        assert!(matches!(result, Err(SpeechError::Credential(_))));
    }

    #[test]
    #[serial]
    fn test_load_from_prefers_file() {
        clear_env();
        env::set_var(API_KEY_ENV, "gsk_env");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"api_key = "gsk_file""#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_key, "gsk_file");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_falls_back_to_env() {
        clear_env();
        env::set_var(API_KEY_ENV, "gsk_env");

        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_key, "gsk_env");

        clear_env();
    }
}
