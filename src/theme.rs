//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and pre-built styles so the checklist,
//! dialogs, and log pane stay visually consistent.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background for panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Informational feedback
    pub const INFO: Color = Color::Blue;

    /// Category separator rows in the checklist
    pub const CATEGORY: Color = Color::Magenta;
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Panel/section titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// The row under the cursor
    pub fn cursor_row() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// A checked (selected) entry
    pub fn checked() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// An unchecked entry
    pub fn unchecked() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Category separator rows
    pub fn category() -> Style {
        Style::default()
            .fg(Colors::CATEGORY)
            .add_modifier(Modifier::BOLD)
    }

    /// stderr lines in the install log
    pub fn log_stderr() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    /// stdout lines in the install log
    pub fn log_stdout() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }
}
