//! Header bar with the assistant's title and subtitle.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Height of the header in lines.
pub const HEADER_HEIGHT: u16 = 2;

/// Two-line header on the primary color.
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            subtitle,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                format!(" {}", self.title),
                Style::default()
                    .fg(self.theme.on_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.subtitle),
                Style::default().fg(self.theme.subtitle),
            )),
        ];
        Paragraph::new(lines)
            .style(Style::default().bg(self.theme.primary))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_header_renders_title_and_subtitle() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Header::new("Ada", "Universidade Federal de Santa Maria", &theme).render(area, &mut buf);

        let out = buffer_to_string(&buf);
        assert_eq!(out, " Ada\n Universidade Federal de Santa Maria");
        assert_eq!(buf[(0, 0)].bg, theme.primary);
    }
}
