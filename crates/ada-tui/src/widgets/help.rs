//! Key binding help overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::{BorderSet, Theme};

const HELP_TEXT: &str = "
  Enter             Enviar mensagem
  Ctrl+J            Nova linha
  Up/Down           Rolar uma linha
  PgUp/PgDn         Rolar uma página
  Ctrl+End          Ir para a última mensagem
  F1                Mostrar/ocultar ajuda
  Esc / Ctrl+C      Sair

  [Qualquer tecla fecha]
";

/// Centered help box listing the key bindings.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self { theme, borders }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 50.min(area.width.saturating_sub(4));
        let height = 13.min(area.height.saturating_sub(2));
        let overlay = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        Clear.render(overlay, buf);

        let block = Block::default()
            .title(" Ajuda ")
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().fg(self.theme.text).bg(self.theme.surface));

        Paragraph::new(HELP_TEXT).block(block).render(overlay, buf);
    }
}
