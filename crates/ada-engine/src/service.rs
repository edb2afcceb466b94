//! The answering service and its HTTP client.
//!
//! The remote service is opaque: a fallible `ask(question) -> answer`.
//! [`HttpAskService`] talks to it over `POST {"question": ...}` and reads
//! the `answer` field of the JSON reply.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::debug;

/// Something that can answer a question.
///
/// Each call resolves exactly once, to an answer or an error.
pub trait AskService: Send + Sync + 'static {
    fn ask(&self, question: String) -> impl Future<Output = Result<String, AskError>> + Send;
}

/// Request body sent to the service.
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Response body expected from the service. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

/// HTTP client for the `/chat/ask` endpoint.
#[derive(Debug, Clone)]
pub struct HttpAskService {
    client: Client,
    endpoint: String,
}

impl HttpAskService {
    /// Create a client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, question: &str) -> Result<String, AskError> {
        debug!(endpoint = %self.endpoint, len = question.len(), "Sending question");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(AskError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(AskError::Transport)?;
        let parsed: AskResponse = serde_json::from_slice(&body).map_err(AskError::Malformed)?;

        debug!(status = status.as_u16(), len = parsed.answer.len(), "Received answer");
        Ok(parsed.answer)
    }
}

impl AskService for HttpAskService {
    fn ask(&self, question: String) -> impl Future<Output = Result<String, AskError>> + Send {
        async move { self.post(&question).await }
    }
}

/// Errors from asking the service. The user sees all of them the same way.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// Connection failed or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned status {0}")]
    Status(u16),

    /// The body was not JSON or had no string `answer` field.
    #[error("Malformed response: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Failure reported by a non-HTTP service implementation.
    #[error("{0}")]
    Other(String),
}
