//! Color themes for the board and chrome.

use ratatui::style::{Color, Modifier, Style};

/// Light or dark palette. Purely presentational; toggling never touches
/// game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on the terminal's default background.
    #[default]
    Light,
    /// Bright text on a dark background.
    Dark,
}

impl Theme {
    /// Toggles between the two palettes.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the display name.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Base style painted over the whole frame.
    pub fn base(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
            Theme::Dark => Style::default().fg(Color::Gray).bg(Color::Black),
        }
    }

    /// Style for the `X` mark.
    pub fn x_mark(self) -> Style {
        let fg = match self {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::LightBlue,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Style for the `O` mark.
    pub fn o_mark(self) -> Style {
        let fg = match self {
            Theme::Light => Color::Red,
            Theme::Dark => Color::LightRed,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Style for empty cells and grid lines.
    pub fn dim(self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Style for the status line.
    pub fn status(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            Theme::Dark => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        }
    }
}
