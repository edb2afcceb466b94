//! Configuration for the Ada chat client.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock client pointed at a local `/chat/ask` endpoint.

use crate::conversation::{Conversation, DEFAULT_FALLBACK_MESSAGE};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default answering endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/chat/ask";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL the questions are posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// First assistant message of a session. Empty disables it.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Apology shown when a request fails.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Header title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Header subtitle.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Placeholder shown in the empty input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Hint line under the input.
    #[serde(default = "default_hint")]
    pub hint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_greeting() -> String {
    "Olá! Meu nome é Ada, a assistente virtual do curso de Sistemas para Internet. \
     Como posso ajudá-lo hoje?"
        .into()
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.into()
}

fn default_title() -> String {
    "Ada - Chatbot do Curso de Sistemas para Internet".into()
}

fn default_subtitle() -> String {
    "Universidade Federal de Santa Maria".into()
}

fn default_placeholder() -> String {
    "Digite sua mensagem...".into()
}

fn default_hint() -> String {
    "Dúvidas sobre cursos, matrículas, calendário acadêmico e mais".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            greeting: default_greeting(),
            fallback_message: default_fallback_message(),
            title: default_title(),
            subtitle: default_subtitle(),
            placeholder: default_placeholder(),
            hint: default_hint(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Override the endpoint, validating the new value.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> Result<(), ConfigError> {
        let endpoint = endpoint.into();
        parse_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        Ok(())
    }

    /// Check that the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_endpoint(&self.endpoint).map(|_| ())
    }

    /// Build a fresh conversation with this config's greeting and fallback.
    pub fn new_conversation(&self) -> Conversation {
        Conversation::new()
            .with_fallback_message(self.fallback_message.clone())
            .with_greeting(&self.greeting)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint(format!(
            "{endpoint}: unsupported scheme '{other}'"
        ))),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert!(config.greeting.starts_with("Olá! Meu nome é Ada"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ada.json");
        std::fs::write(
            &path,
            r#"{"endpoint": "https://ada.example.org/chat/ask", "greeting": ""}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.endpoint, "https://ada.example.org/chat/ask");
        assert_eq!(config.greeting, "");
        assert_eq!(config.title, default_title());
        assert!(config.new_conversation().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_bad_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ada.json");
        std::fs::write(&path, "{ endpoint: ").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config = Config::default();
        assert!(matches!(
            config.set_endpoint("not a url"),
            Err(ConfigError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            config.set_endpoint("ftp://example.org/ask"),
            Err(ConfigError::InvalidEndpoint(_))
        ));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        config.set_endpoint("http://127.0.0.1:9000/chat/ask").unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/chat/ask");
    }

    #[test]
    fn test_new_conversation_has_greeting() {
        let config = Config::default();
        let conv = config.new_conversation();
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.fallback_message(), DEFAULT_FALLBACK_MESSAGE);
    }
}
