//! Message renderer.
//!
//! Pure mapping from a [`Message`] to styled lines. The layout depends only
//! on the sender: user messages sit on the trailing (right) side with the
//! user icon and a tinted bubble, assistant messages on the leading (left)
//! side with the assistant icon.
//!
//! ```text
//! 🤖
//!  Olá! Meu nome é Ada.
//!  Como posso ajudar?
//! 14:02
//!                                                    👤
//!                                        quando abre a
//!                                        matrícula?
//!                                                 14:03
//! ```

use ada_engine::{Message, Sender};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::text::{visual_width, wrap_preserving};
use crate::theme::{IconSet, Theme};

/// Share of the available width a bubble may use.
pub const BUBBLE_WIDTH_PERCENT: usize = 75;

/// Horizontal padding inside a bubble, per side.
const BUBBLE_PADDING: usize = 1;

/// Renders messages with a given theme and icon set.
#[derive(Debug, Clone, Copy)]
pub struct MessageRenderer<'a> {
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> MessageRenderer<'a> {
    pub fn new(theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self { theme, icons }
    }

    /// Lines for one message laid out in `width` cells.
    pub fn lines(&self, message: &Message, width: u16) -> Vec<Line<'static>> {
        let sender = message.sender();
        let alignment = alignment_for(sender);
        let (icon, icon_style, bubble_style) = match sender {
            Sender::User => (
                self.icons.user(),
                Style::default().fg(self.theme.primary),
                Style::default()
                    .fg(self.theme.user_text)
                    .bg(self.theme.user_bubble),
            ),
            Sender::Assistant => (
                self.icons.assistant(),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(self.theme.assistant_text)
                    .bg(self.theme.assistant_bubble),
            ),
        };

        let max_bubble = (usize::from(width) * BUBBLE_WIDTH_PERCENT / 100).max(1);
        let text_width = max_bubble.saturating_sub(BUBBLE_PADDING * 2).max(1);
        let text_lines = wrap_preserving(message.text(), text_width);
        let inner_width = text_lines
            .iter()
            .map(|l| visual_width(l))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(text_lines.len() + 2);
        lines.push(Line::from(Span::styled(icon, icon_style)).alignment(alignment));

        let pad = " ".repeat(BUBBLE_PADDING);
        for text in text_lines {
            let fill = " ".repeat(inner_width - visual_width(&text));
            lines.push(
                Line::from(Span::styled(format!("{pad}{text}{fill}{pad}"), bubble_style))
                    .alignment(alignment),
            );
        }

        lines.push(
            Line::from(Span::styled(
                message.timestamp().to_string(),
                Style::default().fg(self.theme.muted),
            ))
            .alignment(alignment),
        );

        lines
    }
}

/// Which side a sender's messages sit on.
pub fn alignment_for(sender: Sender) -> Alignment {
    match sender {
        Sender::User => Alignment::Right,
        Sender::Assistant => Alignment::Left,
    }
}
