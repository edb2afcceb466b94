//! ada-tui: Terminal UI for the Ada chat client
//!
//! This crate provides the conversation view:
//! - Message renderer with sender-dependent layout
//! - Scrolling transcript that follows the newest message
//! - Multi-line input bar with a waiting marker
//! - Event loop multiplexing terminal input and settled answers

mod app;
mod event;
pub mod renderer;
pub mod text;
pub mod theme;
#[cfg(test)]
pub mod test_utils;
pub mod transcript;
mod ui;
pub mod widgets;

pub use app::{App, Chrome};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use ada_engine;

use ada_engine::{AskService, Config, HttpAskService, SettledReceiver};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::info;

/// Tick period for the spinner, in milliseconds.
const TICK_RATE_MS: u64 = 250;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the chat TUI against the configured endpoint.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit, including on error.
pub async fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let service = HttpAskService::new(config.endpoint.clone());
    info!(endpoint = %service.endpoint(), "Starting chat");

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    // Bracketed paste keeps pasted newlines out of the Enter binding.
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (mut app, mut settled_rx) = App::new(config, service);
    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &mut settled_rx, &mut events).await;

    // Outstanding requests never produce a message after quit.
    app.abort_all();
    info!(messages = app.conversation().len(), "Chat closed");

    terminal.show_cursor()?;
    result
}

async fn run_loop<S: AskService>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
    settled_rx: &mut SettledReceiver,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(event) => app.handle_event(event),
                None => break,
            },
            Some(settled) = settled_rx.recv() => app.apply_settled(settled),
        }
    }
    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::test_utils::{
        buffer_to_string, create_test_terminal_sized, type_text, ScriptedService,
    };
    use crate::theme::IconMode;
    use ada_engine::Conversation;
    use insta::assert_snapshot;

    fn snapshot_app() -> (App<ScriptedService>, SettledReceiver) {
        let chrome = Chrome {
            title: "Ada".into(),
            subtitle: "UFSM".into(),
            placeholder: "Digite sua mensagem...".into(),
            hint: "F1 ajuda".into(),
        };
        let (app, rx) = App::with_conversation(Conversation::new(), chrome, ScriptedService);
        (app.with_icon_mode(IconMode::Ascii), rx)
    }

    fn render<S: AskService>(app: &mut App<S>, width: u16, height: u16) -> String {
        let mut terminal = create_test_terminal_sized(width, height);
        terminal.draw(|frame| ui::draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    // ========================================================================
    // Screen Snapshot Tests
    // ========================================================================

    #[tokio::test]
    async fn test_snapshot_empty_screen() {
        let (mut app, _rx) = snapshot_app();
        let out = render(&mut app, 40, 12);
        assert_snapshot!(out, @r#"
 Ada
 UFSM



         Nenhuma mensagem ainda


+======================================+
|> _Digite sua mensagem...             |
+======================================+
                F1 ajuda
"#);
    }

    #[tokio::test]
    async fn test_snapshot_exchange() {
        let (mut app, mut rx) = snapshot_app();
        type_text(&mut app, "Oi");
        app.handle_action(Action::Submit);
        app.apply_settled(rx.recv().await.unwrap());

        let out = render(&mut app, 40, 14);
        insta::with_settings!({filters => vec![(r"\d{2}:\d{2}", "[time]")]}, {
            assert_snapshot!(out, @r#"
 Ada
 UFSM

                                    [U]
                                    Oi
                                  [time]

 [A]
  Bom dia
 [time]
+======================================+
|> _Digite sua mensagem...             |
+======================================+
                F1 ajuda
"#);
        });
    }

    #[tokio::test]
    async fn test_snapshot_waiting_marker() {
        let (mut app, _rx) = snapshot_app();
        type_text(&mut app, "Oi");
        app.handle_action(Action::Submit);

        let out = render(&mut app, 40, 12);
        insta::with_settings!({filters => vec![(r"\d{2}:\d{2}", "[time]")]}, {
            assert_snapshot!(out, @r#"
 Ada
 UFSM



                                    [U]
                                    Oi
                                  [time]
+====================== | aguardando 1 +
|> _Digite sua mensagem...             |
+======================================+
                F1 ajuda
"#);
        });
    }

    #[tokio::test]
    async fn test_snapshot_help_overlay() {
        let (mut app, _rx) = snapshot_app();
        app.handle_action(Action::Help);
        let out = render(&mut app, 60, 16);
        assert_snapshot!(out, @r#"
 Ada
 UFSM+ Ajuda =========================================+
     |                                                |
     |  Enter             Enviar mensagem             |
     |  Ctrl+J            Nova linha                  |
     |  Up/Down           Rolar uma linha             |
     |  PgUp/PgDn         Rolar uma página            |
     |  Ctrl+End          Ir para a última mensagem   |
     |  F1                Mostrar/ocultar ajuda       |
     |  Esc / Ctrl+C      Sair                        |
     |                                                |
     |  [Qualquer tecla fecha]                        |
+----|                                                |----+
|> Di+================================================+    |
+----------------------------------------------------------+
                          F1 ajuda
"#);
    }
}
