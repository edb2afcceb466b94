//! Application state for the chat screen.

use ada_engine::{AskService, ChatSession, Config, Conversation, Settled, SettledReceiver};
use crossterm::event::MouseEventKind;
use tracing::debug;

use crate::event::{key_to_action, Action, Event};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::transcript::{TranscriptState, SCROLL_SPEED};
use crate::widgets::TextInputState;

/// Fixed texts around the conversation.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub hint: String,
}

impl Chrome {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            placeholder: config.placeholder.clone(),
            hint: config.hint.clone(),
        }
    }
}

/// Main application state.
pub struct App<S> {
    pub(crate) session: ChatSession<S>,
    pub(crate) input: TextInputState,
    pub(crate) transcript: TranscriptState,
    pub(crate) theme: Theme,
    pub(crate) icons: IconSet,
    pub(crate) borders: BorderSet,
    pub(crate) chrome: Chrome,
    pub(crate) tick: usize,
    pub(crate) show_help: bool,
    should_quit: bool,
}

impl<S: AskService> App<S> {
    /// Create the app and the receiver answers arrive on.
    pub fn new(config: &Config, service: S) -> (Self, SettledReceiver) {
        Self::with_conversation(config.new_conversation(), Chrome::from_config(config), service)
    }

    /// Create the app around an existing conversation.
    pub fn with_conversation(
        conversation: Conversation,
        chrome: Chrome,
        service: S,
    ) -> (Self, SettledReceiver) {
        let (session, settled_rx) = ChatSession::new(conversation, service);
        let mode = IconMode::from_env();
        let app = Self {
            session,
            input: TextInputState::new(),
            transcript: TranscriptState::new(),
            theme: Theme::from_env(),
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            chrome,
            tick: 0,
            show_help: false,
            should_quit: false,
        };
        (app, settled_rx)
    }

    /// Override the icon and border glyphs.
    #[must_use]
    pub fn with_icon_mode(mut self, mode: IconMode) -> Self {
        self.icons = IconSet::new(mode);
        self.borders = BorderSet::new(mode);
        self
    }

    pub fn conversation(&self) -> &Conversation {
        self.session.conversation()
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_action(key_to_action(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.transcript.scroll_up(SCROLL_SPEED),
                MouseEventKind::ScrollDown => self.transcript.scroll_down(SCROLL_SPEED),
                _ => {}
            },
            Event::Paste(text) => self.paste(&text),
            Event::Tick => self.tick = self.tick.wrapping_add(1),
            // Bounds are refreshed on the next render.
            Event::Resize(_, _) => {}
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            if action != Action::None {
                self.show_help = false;
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Submit => self.submit(),
            Action::Newline => self.edit(|input| input.insert('\n')),
            Action::Insert(c) => self.edit(|input| input.insert(c)),
            Action::Backspace => self.edit(TextInputState::backspace),
            Action::Delete => self.edit(TextInputState::delete),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => {
                if self.input.is_empty() {
                    self.transcript.jump_to_latest();
                } else {
                    self.input.move_end();
                }
            }
            Action::ScrollUp => self.transcript.scroll_up(1),
            Action::ScrollDown => self.transcript.scroll_down(1),
            Action::PageUp => self.transcript.page_up(),
            Action::PageDown => self.transcript.page_down(),
            Action::Latest => self.transcript.jump_to_latest(),
            Action::None => {}
        }
    }

    /// Append a finished request's answer.
    pub fn apply_settled(&mut self, settled: Settled) {
        let message = self.session.settle(settled);
        debug!(id = %message.id(), "Answer appended");
        self.transcript.jump_to_latest();
    }

    /// Drop every outstanding request.
    pub fn abort_all(&mut self) {
        self.session.abort_all();
    }

    fn edit(&mut self, f: impl FnOnce(&mut TextInputState)) {
        f(&mut self.input);
        self.session.set_draft(self.input.content());
    }

    /// Insert pasted text into the draft. Newlines stay in the draft.
    fn paste(&mut self, text: &str) {
        self.show_help = false;
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.edit(|input| input.insert_str(&text));
    }

    fn submit(&mut self) {
        if self.session.submit() {
            self.input.clear();
            self.transcript.jump_to_latest();
            debug!(
                in_flight = self.session.conversation().in_flight(),
                "Question submitted"
            );
        }
    }
}
