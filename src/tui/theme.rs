//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

use crate::core::presentation::ColorToken;

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color (matches `ColorToken::Primary`)
    pub const PRIMARY: Color = Color::Rgb(0x6C, 0x63, 0xFF);

    /// Secondary accent color
    pub const SECONDARY: Color = Color::Yellow;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Resolve a color token to a terminal color
    pub fn color(token: ColorToken) -> Color {
        let (r, g, b) = token.rgb();
        Color::Rgb(r, g, b)
    }

    /// Style for text drawn in an emotion's color
    pub fn emotion(token: ColorToken) -> Style {
        Style::default().fg(Self::color(token))
    }

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Section title style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}
