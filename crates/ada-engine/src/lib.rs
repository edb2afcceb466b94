//! ada-engine: Headless conversation engine for the Ada chat client
//!
//! This crate provides everything below the terminal UI:
//! - The message model and the append-only conversation
//! - Dispatch of one asynchronous request per submission
//! - The answering service seam and its HTTP client
//! - Configuration

pub mod config;
pub mod conversation;
pub mod message;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ConfigError, DEFAULT_ENDPOINT};
pub use conversation::{Conversation, PendingRequest, DEFAULT_FALLBACK_MESSAGE};
pub use message::{Message, MessageId, Sender};
pub use service::{AskError, AskService, HttpAskService};
pub use session::{ChatSession, Settled, SettledReceiver};

use tracing::warn;

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Ask a single question and return the text the conversation would show.
///
/// Failures are absorbed into the configured fallback message.
pub async fn ask_once<S: AskService>(config: &Config, service: &S, question: &str) -> String {
    let mut conversation = Conversation::new().with_fallback_message(config.fallback_message.clone());
    conversation.set_draft(question);
    let Some(request) = conversation.submit() else {
        warn!("Blank question, nothing sent");
        return String::new();
    };
    let outcome = service.ask(request.question().to_string()).await;
    conversation.settle(request, outcome).text().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    struct Echo;

    impl AskService for Echo {
        fn ask(&self, question: String) -> impl Future<Output = Result<String, AskError>> + Send {
            async move {
                if question == "teste" {
                    Err(AskError::Status(503))
                } else {
                    Ok(question.to_uppercase())
                }
            }
        }
    }

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[tokio::test]
    async fn test_ask_once() {
        let config = Config::default();
        assert_eq!(ask_once(&config, &Echo, "oi").await, "OI");
        assert_eq!(
            ask_once(&config, &Echo, "teste").await,
            DEFAULT_FALLBACK_MESSAGE
        );
        assert_eq!(ask_once(&config, &Echo, "  ").await, "");
    }
}
