//! Request dispatch for a conversation.
//!
//! [`ChatSession`] spawns one task per submission. Each task sends a
//! [`Settled`] back over a channel whose receiver the caller owns, so the
//! conversation itself is only ever touched by the caller's loop.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::conversation::{Conversation, PendingRequest};
use crate::message::Message;
use crate::service::{AskError, AskService};

/// A finished request paired with its outcome.
#[derive(Debug)]
pub struct Settled {
    pub request: PendingRequest,
    pub outcome: Result<String, AskError>,
}

/// Receiving half handed out by [`ChatSession::new`].
pub type SettledReceiver = mpsc::UnboundedReceiver<Settled>;

/// A conversation wired to an answering service.
pub struct ChatSession<S> {
    conversation: Conversation,
    service: Arc<S>,
    settled_tx: mpsc::UnboundedSender<Settled>,
    tasks: Vec<JoinHandle<()>>,
}

impl<S: AskService> ChatSession<S> {
    /// Create a session and the receiver its results arrive on.
    pub fn new(conversation: Conversation, service: S) -> (Self, SettledReceiver) {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let session = Self {
            conversation,
            service: Arc::new(service),
            settled_tx,
            tasks: Vec::new(),
        };
        (session, settled_rx)
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.conversation.set_draft(text);
    }

    /// Submit the draft and send it to the service.
    ///
    /// Returns `false` when the draft was blank and nothing happened.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> bool {
        let Some(request) = self.conversation.submit() else {
            return false;
        };

        self.tasks.retain(|task| !task.is_finished());

        let service = Arc::clone(&self.service);
        let tx = self.settled_tx.clone();
        let task = tokio::spawn(async move {
            let outcome = service.ask(request.question().to_string()).await;
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(Settled { request, outcome });
        });
        self.tasks.push(task);
        true
    }

    /// Apply a finished request to the conversation.
    pub fn settle(&mut self, settled: Settled) -> &Message {
        self.conversation.settle(settled.request, settled.outcome)
    }

    /// Abort every outstanding request. Aborted requests produce no message.
    pub fn abort_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl<S> Drop for ChatSession<S> {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
