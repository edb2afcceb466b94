//! Transcript widget.

use ada_engine::Message;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::state::TranscriptState;
use crate::renderer::MessageRenderer;
use crate::theme::{IconSet, Theme};

/// Shown when there are no messages.
const EMPTY_TEXT: &str = "Nenhuma mensagem ainda";

/// Renders every message top to bottom, one blank line between messages.
pub struct TranscriptWidget<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            messages,
            theme,
            icons,
        }
    }

    /// All transcript lines for the given width.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let renderer = MessageRenderer::new(self.theme, self.icons);
        let mut lines = Vec::new();
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.extend(renderer.lines(message, width));
        }
        lines
    }
}

impl StatefulWidget for TranscriptWidget<'_> {
    type State = TranscriptState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TranscriptState) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.messages.is_empty() {
            state.update_bounds(0, usize::from(area.height));
            let line = Line::from(Span::styled(
                EMPTY_TEXT,
                Style::default().fg(self.theme.muted),
            ))
            .alignment(Alignment::Center);
            let y = area.y + area.height / 2;
            Paragraph::new(line).render(Rect::new(area.x, y, area.width, 1), buf);
            return;
        }

        let lines = self.lines(area.width);
        let viewport = usize::from(area.height);
        state.update_bounds(lines.len(), viewport);

        let start = state.first_visible(lines.len(), viewport);
        let end = (start + viewport).min(lines.len());
        let visible: Vec<Line<'static>> = lines[start..end].to_vec();

        // Short conversations sit at the bottom, next to the input.
        #[allow(clippy::cast_possible_truncation)]
        let top_gap = (viewport - visible.len()) as u16;
        let target = Rect::new(area.x, area.y + top_gap, area.width, area.height - top_gap);
        Paragraph::new(visible).render(target, buf);

        if !state.is_following() {
            let marker = format!(" {} +{} ", self.icons.scrolled_back(), state.offset());
            let line = Line::from(Span::styled(
                marker,
                Style::default().fg(self.theme.on_primary).bg(self.theme.primary),
            ))
            .alignment(Alignment::Center);
            let y = area.y + area.height - 1;
            Paragraph::new(line).render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}
