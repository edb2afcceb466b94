//! Transcript pane: the scrolling list of messages.
//!
//! - [`TranscriptState`] - scroll position, pinned to the newest line
//! - [`TranscriptWidget`] - renders messages with the message renderer

mod state;
mod widget;

pub use state::{TranscriptState, SCROLL_SPEED};
pub use widget::TranscriptWidget;
