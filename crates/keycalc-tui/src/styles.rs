//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the keypad.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for the display digits.
    #[must_use]
    pub fn lcd_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Get the style for the error indicator.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Get the style for an idle button.
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for an operator button.
    #[must_use]
    pub fn operator_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Get the style for the most recently pressed button.
    #[must_use]
    pub fn pressed_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for panel borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
