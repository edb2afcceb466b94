//! Message model for the conversation.

use chrono::{DateTime, Local};
use std::fmt;

/// Format used for message timestamps (two-digit hour and minute).
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

/// Sequence number of a message within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Typed by the person at the keyboard.
    User,
    /// Answer from the service, or the local fallback.
    Assistant,
}

impl Sender {
    /// Whether this is the user side of the conversation.
    pub fn is_user(self) -> bool {
        self == Sender::User
    }
}

/// A single entry in the conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: String,
}

impl Message {
    /// Create a message stamped with the given local time.
    pub fn new(
        id: MessageId,
        sender: Sender,
        text: impl Into<String>,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Create a message stamped with the current local time.
    pub fn now(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self::new(id, sender, text, Local::now())
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Creation time as `HH:MM`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.sender.is_user()
    }
}
