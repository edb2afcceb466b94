//! Screen layout.
//!
//! ```text
//! ┌ header (title, subtitle) ─────────────┐
//! │ transcript                            │
//! │ input bar (grows with the draft)      │
//! └ hint ─────────────────────────────────┘
//! ```

use ada_engine::AskService;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::transcript::TranscriptWidget;
use crate::widgets::{Header, HelpOverlay, InputBar, HEADER_HEIGHT};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;

/// Draw the whole screen.
pub fn draw<S: AskService>(frame: &mut Frame<'_>, app: &mut App<S>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.base)), area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, app, area);
        return;
    }

    let input_height = InputBar::desired_height(&app.input);
    let [header_area, transcript_area, input_area, hint_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(input_height),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Header::new(&app.chrome.title, &app.chrome.subtitle, &app.theme),
        header_area,
    );

    let transcript = TranscriptWidget::new(
        app.session.conversation().messages(),
        &app.theme,
        &app.icons,
    );
    frame.render_stateful_widget(
        transcript,
        transcript_area.inner(Margin::new(1, 0)),
        &mut app.transcript,
    );

    let input = InputBar::new(&app.input, &app.theme, &app.icons, &app.borders)
        .placeholder(&app.chrome.placeholder)
        .focused(!app.show_help)
        .waiting(app.session.conversation().in_flight(), app.tick);
    frame.render_widget(input, input_area);

    let hint = Paragraph::new(Line::from(Span::styled(
        app.chrome.hint.as_str(),
        Style::default().fg(app.theme.muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);

    if app.show_help {
        frame.render_widget(HelpOverlay::new(&app.theme, &app.borders), area);
    }
}

fn render_too_small<S>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let text = format!("Terminal muito pequeno ({MIN_WIDTH}x{MIN_HEIGHT} no mínimo)");
    let message = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(app.theme.warning),
    )))
    .alignment(Alignment::Center);
    let y = area.y + area.height / 2;
    frame.render_widget(message, Rect::new(area.x, y, area.width, 1));
}
