//! Dialog and overlay rendering
//!
//! The confirmation dialog summarizes the selection and the exact command
//! before anything runs; the help overlay lists the key bindings.

use crate::app::AppState;
use crate::install::InstallPlan;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rect of the given size, clamped to the frame.
fn centered_rect(width: u16, height: u16, frame_area: Rect) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let x = frame_area.x + (frame_area.width.saturating_sub(width)) / 2;
    let y = frame_area.y + (frame_area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the install confirmation dialog on top of the browse view.
pub fn render_confirm_dialog(f: &mut Frame, state: &AppState) {
    let entries = state.selected_entries();
    let area = centered_rect(70, 18, f.area());
    f.render_widget(Clear, area);

    let dialog = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm Install ")
        .title_style(Styles::title())
        .border_style(Style::default().fg(Colors::PRIMARY))
        .style(Style::default().bg(Colors::BG_PRIMARY));
    f.render_widget(dialog, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Summary line
            Constraint::Min(4),    // Package list
            Constraint::Length(3), // Command preview
            Constraint::Length(1), // Buttons
        ])
        .split(area);

    let mode_note = if state.dry_run {
        " (dry run: the command is only printed)"
    } else {
        ""
    };
    let summary = Paragraph::new(format!(
        "Install {} application(s){}",
        entries.len(),
        mode_note
    ))
    .style(Style::default().fg(Colors::FG_PRIMARY));
    f.render_widget(summary, chunks[0]);

    // Package names, wrapped into one paragraph
    let names = entries
        .iter()
        .map(|e| e.name)
        .collect::<Vec<_>>()
        .join(", ");
    let list = Paragraph::new(names)
        .style(Style::default().fg(Colors::FG_SECONDARY))
        .wrap(Wrap { trim: true });
    f.render_widget(list, chunks[1]);

    // The exact command that will run
    let command = state
        .manager
        .and_then(|m| InstallPlan::from_entries(m, &entries, state.dry_run).ok())
        .map(|p| p.command_line())
        .unwrap_or_else(|| "(no package manager detected)".to_string());
    let preview = Paragraph::new(command)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Command ")
                .border_style(Style::default().fg(Colors::FG_MUTED)),
        )
        .style(Style::default().fg(Colors::SECONDARY))
        .wrap(Wrap { trim: true });
    f.render_widget(preview, chunks[2]);

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] Install   ", Style::default().fg(Colors::SUCCESS)),
        Span::styled("[Esc] Cancel", Style::default().fg(Colors::ERROR)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, chunks[3]);
}

/// Render the help overlay listing key bindings.
pub fn render_help_overlay(f: &mut Frame) {
    const BINDINGS: [(&str, &str); 10] = [
        ("Up/Down, j/k", "Move between applications"),
        ("PageUp/PageDown", "Move a page at a time"),
        ("Home/End", "Jump to first / last application"),
        ("Space, Enter", "Toggle the application under the cursor"),
        ("a", "Select all applications"),
        ("n", "Clear the selection"),
        ("i", "Install the selected applications"),
        ("?", "Toggle this help"),
        ("q, Esc", "Quit"),
        ("RUST_LOG=debug", "Environment: verbose logging to stderr"),
    ];

    let height = BINDINGS.len() as u16 + 4;
    let area = centered_rect(56, height, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", key), Styles::cursor_row()),
            Span::styled(description, Style::default().fg(Colors::FG_SECONDARY)),
        ]));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY))
            .style(Style::default().bg(Colors::BG_PRIMARY)),
    );
    f.render_widget(help, area);
}
