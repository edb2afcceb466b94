//! Color palettes for the TUI.
//!
//! The light palette follows the blue/gray scheme of the web client; the
//! dark palette is the same hues on a dark background.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub on_primary: Color,
    pub subtitle: Color,

    // Message bubbles
    pub user_bubble: Color,
    pub user_text: Color,
    pub assistant_bubble: Color,
    pub assistant_text: Color,

    // Semantic
    pub warning: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette by name: `dark`, `light` or `high-contrast`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Palette chosen by `ADA_THEME`, dark when unset or unknown.
    pub fn from_env() -> Self {
        std::env::var("ADA_THEME")
            .ok()
            .and_then(|name| Self::from_name(&name))
            .unwrap_or_default()
    }

    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            base: Color::Rgb(17, 24, 39),    // #111827 gray-900
            surface: Color::Rgb(31, 41, 55), // #1f2937 gray-800

            text: Color::Rgb(243, 244, 246),  // #f3f4f6 gray-100
            muted: Color::Rgb(156, 163, 175), // #9ca3af gray-400

            primary: Color::Rgb(37, 99, 235),     // #2563eb blue-600
            on_primary: Color::Rgb(255, 255, 255),
            subtitle: Color::Rgb(219, 234, 254),  // #dbeafe blue-100

            user_bubble: Color::Rgb(30, 58, 138),       // #1e3a8a blue-900
            user_text: Color::Rgb(219, 234, 254),       // #dbeafe blue-100
            assistant_bubble: Color::Rgb(31, 41, 55),   // #1f2937 gray-800
            assistant_text: Color::Rgb(243, 244, 246),  // #f3f4f6 gray-100

            warning: Color::Rgb(250, 204, 21), // #facc15 yellow-400

            border: Color::Rgb(55, 65, 81),          // #374151 gray-700
            border_focused: Color::Rgb(59, 130, 246), // #3b82f6 blue-500
        }
    }

    /// Light theme, close to the web client.
    pub fn light() -> Self {
        Self {
            base: Color::Rgb(249, 250, 251),    // #f9fafb gray-50
            surface: Color::Rgb(255, 255, 255), // white

            text: Color::Rgb(17, 24, 39),     // #111827 gray-900
            muted: Color::Rgb(107, 114, 128), // #6b7280 gray-500

            primary: Color::Rgb(37, 99, 235),    // #2563eb blue-600
            on_primary: Color::Rgb(255, 255, 255),
            subtitle: Color::Rgb(219, 234, 254), // #dbeafe blue-100

            user_bubble: Color::Rgb(219, 234, 254),      // #dbeafe blue-100
            user_text: Color::Rgb(30, 58, 138),          // #1e3a8a blue-900
            assistant_bubble: Color::Rgb(255, 255, 255), // white
            assistant_text: Color::Rgb(17, 24, 39),      // #111827 gray-900

            warning: Color::Rgb(202, 138, 4), // #ca8a04 yellow-600

            border: Color::Rgb(229, 231, 235),         // #e5e7eb gray-200
            border_focused: Color::Rgb(59, 130, 246),  // #3b82f6 blue-500
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            muted: Color::Rgb(180, 180, 180),

            primary: Color::Blue,
            on_primary: Color::White,
            subtitle: Color::White,

            user_bubble: Color::Blue,
            user_text: Color::White,
            assistant_bubble: Color::Rgb(40, 40, 40),
            assistant_text: Color::White,

            warning: Color::Yellow,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
