//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons.
    Nerd,
    /// Standard Unicode symbols (default, wide compatibility).
    #[default]
    Unicode,
    /// ASCII-only fallback (also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Pick a mode from the environment: `NO_COLOR` forces ASCII,
    /// `ADA_NERD_FONT` opts into Nerd Font glyphs.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            IconMode::Ascii
        } else if std::env::var_os("ADA_NERD_FONT").is_some() {
            IconMode::Nerd
        } else {
            IconMode::Unicode
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // === Sender Icons ===

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f007}",
            IconMode::Unicode => "👤",
            IconMode::Ascii => "[U]",
        }
    }

    pub fn assistant(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f06a9}",
            IconMode::Unicode => "🤖",
            IconMode::Ascii => "[A]",
        }
    }

    // === Input Icons ===

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f054} ",
            IconMode::Unicode => "› ",
            IconMode::Ascii => "> ",
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "█",
            IconMode::Ascii => "_",
        }
    }

    /// Spinner frame for the given tick.
    pub fn spinner(&self, tick: usize) -> &'static str {
        const UNICODE: [&str; 4] = ["◐", "◓", "◑", "◒"];
        const ASCII: [&str; 4] = ["|", "/", "-", "\\"];
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => UNICODE[tick % UNICODE.len()],
            IconMode::Ascii => ASCII[tick % ASCII.len()],
        }
    }

    pub fn scrolled_back(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f063}",
            IconMode::Unicode => "↓",
            IconMode::Ascii => "v",
        }
    }
}
