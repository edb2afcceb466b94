//! Full-width input bar widget.
//!
//! Always visible at the bottom of the screen for text entry. Supports
//! multi-line drafts (Ctrl+J inserts a newline). While answers are
//! outstanding a spinner sits in the border title; typing is never blocked.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::text_input::TextInputState;
use crate::theme::{BorderSet, IconSet, Theme};

/// Most draft lines shown before the bar starts scrolling.
pub const MAX_VISIBLE_LINES: u16 = 5;

/// Full-width input bar for text entry.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    placeholder: &'a str,
    focused: bool,
    in_flight: usize,
    tick: usize,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(
        input: &'a TextInputState,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            input,
            theme,
            icons,
            borders,
            placeholder: "",
            focused: true,
            in_flight: 0,
            tick: 0,
        }
    }

    /// Placeholder shown while the draft is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set whether the input bar is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Number of outstanding requests, and the animation tick.
    #[must_use]
    pub fn waiting(mut self, in_flight: usize, tick: usize) -> Self {
        self.in_flight = in_flight;
        self.tick = tick;
        self
    }

    /// Height the bar wants for the current draft, borders included.
    pub fn desired_height(input: &TextInputState) -> u16 {
        let lines = u16::try_from(input.line_count()).unwrap_or(u16::MAX);
        lines.clamp(1, MAX_VISIBLE_LINES) + 2
    }

    /// Build Lines for multi-line input display.
    /// Returns the lines to display and which line index contains the cursor.
    fn build_input_lines(&self) -> (Vec<Line<'static>>, usize) {
        let text_style = Style::default().fg(self.theme.text);
        let prompt_style = Style::default().fg(self.theme.primary);
        let prompt = self.icons.prompt();
        let indent = " ".repeat(crate::text::visual_width(prompt));
        let cursor = self.icons.cursor();

        if self.input.is_empty() {
            let mut spans = vec![Span::styled(prompt, prompt_style)];
            if self.focused {
                spans.push(Span::styled(cursor, text_style));
            }
            spans.push(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(self.theme.muted),
            ));
            return (vec![Line::from(spans)], 0);
        }

        // Lines are separated by one newline, so exactly one line holds the cursor.
        let cursor_pos = self.input.cursor();
        let mut lines = Vec::new();
        let mut cursor_line = 0;
        let mut char_count = 0;

        for (line_idx, text) in self.input.content().split('\n').enumerate() {
            let prefix = if line_idx == 0 {
                Span::styled(prompt, prompt_style)
            } else {
                Span::raw(indent.clone())
            };
            let chars: Vec<char> = text.chars().collect();
            let on_this_line =
                cursor_pos >= char_count && cursor_pos <= char_count + chars.len();

            let mut spans = vec![prefix];
            if on_this_line {
                cursor_line = line_idx;
            }
            if self.focused && on_this_line {
                let col = cursor_pos - char_count;
                let before: String = chars[..col].iter().collect();
                let after: String = chars[col..].iter().collect();
                spans.push(Span::styled(before, text_style));
                spans.push(Span::styled(cursor, text_style));
                spans.push(Span::styled(after, text_style));
            } else {
                spans.push(Span::styled(text.to_string(), text_style));
            }
            lines.push(Line::from(spans));

            // +1 for the newline character
            char_count += chars.len() + 1;
        }

        (lines, cursor_line)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_set, border_color) = if self.focused {
            (self.borders.focused(), self.theme.border_focused)
        } else {
            (self.borders.normal(), self.theme.border)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(Style::default().fg(border_color));

        if self.in_flight > 0 {
            let label = format!(
                " {} aguardando {} ",
                self.icons.spinner(self.tick),
                self.in_flight
            );
            block = block.title(
                Line::from(Span::styled(label, Style::default().fg(self.theme.warning)))
                    .right_aligned(),
            );
        }

        let inner_height = usize::from(area.height.saturating_sub(2));
        let (lines, cursor_line) = self.build_input_lines();

        // Keep the cursor line visible.
        let scroll_offset = if lines.len() <= inner_height {
            0
        } else {
            cursor_line.saturating_sub(inner_height.saturating_sub(1))
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(scroll_offset).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}
