//! Header and common widget rendering
//!
//! This module contains the ASCII art header, the subtitle line, and the
//! bottom navigation bar.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render the subtitle line: detected manager and run mode.
    pub fn render_subtitle(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let manager = match state.manager {
            Some(m) => m.to_string(),
            None => "not detected".to_string(),
        };
        let (mode_text, mode_style) = if state.dry_run {
            ("DRY RUN", Style::default().fg(Colors::WARNING))
        } else {
            ("LIVE", Style::default().fg(Colors::SUCCESS))
        };

        let line = Line::from(vec![
            Span::styled("Package manager: ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled(manager, Styles::cursor_row()),
            Span::styled("  |  Mode: ", Style::default().fg(Colors::FG_SECONDARY)),
            Span::styled(mode_text, mode_style),
            Span::styled(
                format!("  |  Selected: {}", state.selected_count()),
                Style::default().fg(Colors::FG_SECONDARY),
            ),
        ]);

        let subtitle = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        const ART: [&str; 5] = [
            r"  __ _ _ __  _ __   ___ __ _ _ __| |_ ",
            r" / _` | '_ \| '_ \ / __/ _` | '__| __|",
            r"| (_| | |_) | |_) | (_| (_| | |  | |_ ",
            r" \__,_| .__/| .__/ \___\__,_|_|   \__|",
            r"      |_|   |_|                       ",
        ];
        ART.iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Colors::PRIMARY))))
            .collect()
    }
}

/// Render the navigation bar with per-mode key hints
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints = match state.mode {
        AppMode::Browse => {
            "↑/↓ move | Space toggle | a all | n none | i install | ? help | q quit"
        }
        AppMode::ConfirmInstall => "Enter/y confirm | Esc/n cancel",
        AppMode::Installing => "↑/↓ scroll | End follow output",
        AppMode::Complete => "Enter/Esc back to list | q quit",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", hints),
        Style::default().fg(Colors::FG_SECONDARY),
    )];
    if !state.status_message.is_empty() {
        spans.push(Span::styled(
            format!("   [{}]", state.status_message),
            Style::default().fg(Colors::SECONDARY),
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).style(Style::default().bg(Colors::BG_PRIMARY));
    f.render_widget(nav, area);
}
