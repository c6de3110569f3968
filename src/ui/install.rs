//! Install progress and completion rendering
//!
//! The installing view is a streaming log pane with auto-scroll; the
//! completion view adds a banner with the raw exit status.

use super::header::HeaderRenderer;
use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the installing / completion view in the given area
pub fn render_install_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Log pane
            Constraint::Length(3), // Status banner
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    render_title(f, chunks[1], state);
    render_log(f, chunks[2], state);
    render_banner(f, chunks[3], state);
}

fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    let text = if state.dry_run {
        "Installing Applications (dry run)"
    } else {
        "Installing Applications"
    };
    let title = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title, area);
}

/// Render the log window ending at the scroll offset.
fn render_log(f: &mut Frame, area: Rect, state: &AppState) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let end = (state.log_scroll_offset + 1).min(state.install_log.len());
    let start = end.saturating_sub(inner_height);

    let lines: Vec<Line> = state.install_log[start..end]
        .iter()
        .map(|l| {
            let style = if l.stderr {
                Styles::log_stderr()
            } else {
                Styles::log_stdout()
            };
            Line::from(Span::styled(l.text.clone(), style))
        })
        .collect();

    let follow = if state.log_auto_scroll { "" } else { " (paused) " };
    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Output{} ", follow))
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );
    f.render_widget(log, area);
}

fn render_banner(f: &mut Frame, area: Rect, state: &AppState) {
    let (text, style) = match (&state.mode, state.install_result) {
        (AppMode::Installing, _) => (
            "Running... output is streamed above".to_string(),
            Style::default().fg(Colors::INFO),
        ),
        (_, Some((true, _))) => (
            "Install completed successfully".to_string(),
            Style::default().fg(Colors::SUCCESS),
        ),
        (_, Some((false, code))) => (
            format!("Install failed (exit code {})", code.map_or("?".to_string(), |c| c.to_string())),
            Style::default().fg(Colors::ERROR),
        ),
        (_, None) => (
            "Install did not run".to_string(),
            Style::default().fg(Colors::WARNING),
        ),
    };

    let banner = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(banner, area);
}
