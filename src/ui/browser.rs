//! Checklist rendering
//!
//! Renders the scrollable application checklist with category separators
//! on the left and a description panel for the entry under the cursor on
//! the right.

use super::header::HeaderRenderer;
use crate::app::{AppState, Row};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Rows reserved around the checklist: header (5), subtitle (3), borders
/// (2), nav bar (1). Used by the event loop to size the viewport.
pub const RESERVED_ROWS: u16 = 11;

/// Render the browse view in the given area
pub fn render_browser_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(3), // Subtitle
            Constraint::Min(10),   // Checklist + description
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_subtitle(f, chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    render_checklist(f, content_chunks[0], state);
    render_description(f, content_chunks[1], state);
}

/// Render the checklist window: only rows inside the viewport.
fn render_checklist(f: &mut Frame, area: Rect, state: &AppState) {
    let offset = state.scroll.offset();
    let visible = state.scroll.visible_items();

    let items: Vec<ListItem> = state
        .rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(row_index, row)| render_row(state, row_index, row))
        .collect();

    let title = format!(
        " Applications ({} selected) ",
        state.selected_count()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );

    f.render_widget(list, area);
}

fn render_row(state: &AppState, row_index: usize, row: &Row) -> ListItem<'static> {
    match row {
        Row::Category(name) => {
            ListItem::new(format!("━━━ {} ━━━", name)).style(Styles::category())
        }
        Row::Entry { index, entry } => {
            let checked = state.selected[*index];
            let under_cursor = row_index == state.cursor_row;

            let cursor = if under_cursor { "▸" } else { " " };
            let checkbox = if checked { "[x]" } else { "[ ]" };
            let style = if under_cursor {
                Styles::cursor_row()
            } else if checked {
                Styles::checked()
            } else {
                Styles::unchecked()
            };

            ListItem::new(format!("{} {} {}", cursor, checkbox, entry.name)).style(style)
        }
    }
}

/// Render the description panel for the entry under the cursor.
fn render_description(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = match state.cursor_entry() {
        Some(entry) => vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", entry.name), Styles::title())),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", entry.desc),
                Style::default().fg(Colors::FG_SECONDARY),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Package: ", Style::default().fg(Colors::FG_MUTED)),
                Span::styled(entry.pkg, Style::default().fg(Colors::FG_PRIMARY)),
            ]),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select an application",
                Style::default().fg(Colors::FG_MUTED),
            )),
        ],
    };

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(panel, area);
}
