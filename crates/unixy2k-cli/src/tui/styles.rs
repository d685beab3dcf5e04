//! # TUI Theming and Styles
//!
//! Color palette and styling for the countdown screen. A `Styles` value is
//! built once at startup from the configured theme and passed to the
//! renderer.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the countdown screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Title line
    pub title: Color,
    /// Row labels
    pub label: Color,
    /// Row values
    pub value: Color,
    /// Binary octets
    pub binary: Color,
    /// Heading above the remaining time
    pub countdown_label: Color,
    /// Remaining-time sentence
    pub countdown_value: Color,
    /// Values once the rollover has happened
    pub warning: Color,
    /// Error banner
    pub error: Color,
    /// Help and placeholder text
    pub muted: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Dark theme palette (default)
    pub const fn dark() -> Self {
        Self {
            title: Color::Rgb(135, 206, 250),
            label: Color::Indexed(242),
            value: Color::White,
            binary: Color::Rgb(255, 105, 180),
            countdown_label: Color::Indexed(220),
            countdown_value: Color::Rgb(50, 205, 50),
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::Indexed(240),
        }
    }

    /// Light theme palette
    pub const fn light() -> Self {
        Self {
            title: Color::Blue,
            label: Color::DarkGray,
            value: Color::Black,
            binary: Color::Magenta,
            countdown_label: Color::Rgb(184, 134, 11),
            countdown_value: Color::Green,
            warning: Color::Rgb(205, 92, 0),
            error: Color::Red,
            muted: Color::Gray,
        }
    }
}

/// Reusable style definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Color palette
    pub palette: ColorPalette,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorPalette::default())
    }
}

impl Styles {
    /// Create styles with the given palette
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Styles for a configured theme
    pub const fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Dark => Self::new(ColorPalette::dark()),
            ThemeName::Light => Self::new(ColorPalette::light()),
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.palette.label)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(self.palette.value)
    }

    pub fn binary(&self) -> Style {
        Style::default().fg(self.palette.binary)
    }

    pub fn countdown_label(&self) -> Style {
        Style::default().fg(self.palette.countdown_label)
    }

    /// Style for the remaining-time sentence; warning color after rollover
    pub fn countdown_value(&self, elapsed: bool) -> Style {
        let color = if elapsed {
            self.palette.warning
        } else {
            self.palette.countdown_value
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for help and placeholder text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }
}
