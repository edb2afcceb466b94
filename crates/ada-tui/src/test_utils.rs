//! Test utilities for rendering and driving the app.

use std::future::Future;

use ada_engine::{AskError, AskService, Conversation, SettledReceiver};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::{App, Chrome};
use crate::event::Action;
use crate::theme::IconMode;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Answers "Bom dia" to "Oi", fails on "teste", echoes anything else.
pub struct ScriptedService;

impl AskService for ScriptedService {
    fn ask(&self, question: String) -> impl Future<Output = Result<String, AskError>> + Send {
        async move {
            match question.as_str() {
                "Oi" => Ok("Bom dia".to_string()),
                "teste" => Err(AskError::Status(500)),
                other => Ok(format!("Resposta: {other}")),
            }
        }
    }
}

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// App with an empty conversation, default texts and ASCII glyphs.
pub fn create_test_app() -> (App<ScriptedService>, SettledReceiver) {
    let chrome = Chrome::from_config(&ada_engine::Config::default());
    let (app, rx) = App::with_conversation(Conversation::new(), chrome, ScriptedService);
    (app.with_icon_mode(IconMode::Ascii), rx)
}

/// Type `text` into the input one key at a time.
pub fn type_text<S: AskService>(app: &mut App<S>, text: &str) {
    for c in text.chars() {
        app.handle_action(Action::Insert(c));
    }
}

/// Convert a buffer to text, one row per line, trailing spaces trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_to_string_trims_rows() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(2, 2, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\n\n  World");
    }
}
