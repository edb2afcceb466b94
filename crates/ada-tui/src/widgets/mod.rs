//! Widgets for the chat screen.

mod header;
mod help;
mod input_bar;
mod text_input;

pub use header::{Header, HEADER_HEIGHT};
pub use help::HelpOverlay;
pub use input_bar::{InputBar, MAX_VISIBLE_LINES};
pub use text_input::TextInputState;
