//! Application state definitions
//!
//! Contains all state-related types for the application including AppState,
//! AppMode, and the checklist row model.

use crate::catalog::{self, AppEntry};
use crate::manager::PackageManager;
use crate::scrolling::ScrollState;

/// One row of the checklist: a category separator or a selectable entry.
#[derive(Debug, Clone, Copy)]
pub enum Row {
    /// Category separator line
    Category(&'static str),
    /// A selectable application; `index` is the flat catalog index
    Entry {
        index: usize,
        entry: &'static AppEntry,
    },
}

impl Row {
    pub fn is_selectable(&self) -> bool {
        matches!(self, Row::Entry { .. })
    }
}

/// Build the checklist rows: each category contributes a separator row
/// followed by its entries, in catalog order.
pub fn build_rows() -> Vec<Row> {
    let mut rows = Vec::with_capacity(catalog::entry_count() + catalog::CATALOG.len());
    let mut flat_index = 0;
    for category in catalog::CATALOG {
        rows.push(Row::Category(category.name));
        for entry in category.apps {
            rows.push(Row::Entry {
                index: flat_index,
                entry,
            });
            flat_index += 1;
        }
    }
    rows
}

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Checklist browsing and selection
    Browse,
    /// Confirmation dialog before running the install
    ConfirmInstall,
    /// Install command running, log pane streaming
    Installing,
    /// Install finished, summary shown
    Complete,
}

/// One line in the install log pane.
#[derive(Debug, Clone)]
pub struct LogLine {
    /// True for stderr lines (rendered in the warning color)
    pub stderr: bool,
    pub text: String,
}

impl LogLine {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stderr: false,
            text: text.into(),
        }
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            stderr: true,
            text: text.into(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Detected package manager, if any
    pub manager: Option<PackageManager>,
    /// Dry-run mode flag (from the CLI)
    pub dry_run: bool,
    /// Checklist rows (category separators + entries)
    pub rows: Vec<Row>,
    /// Selection toggles, one per catalog entry (flat index)
    pub selected: Vec<bool>,
    /// Cursor position as a row index; always points at a selectable row
    pub cursor_row: usize,
    /// Viewport state for the checklist
    pub scroll: ScrollState,
    /// Status message for user feedback
    pub status_message: String,
    /// Install log lines
    pub install_log: Vec<LogLine>,
    /// Log pane scroll offset
    pub log_scroll_offset: usize,
    /// Whether the log pane follows new output
    pub log_auto_scroll: bool,
    /// Raw result of the install command (success, exit code)
    pub install_result: Option<(bool, Option<i32>)>,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    /// Build the initial state for a detected manager and run mode.
    pub fn new(manager: Option<PackageManager>, dry_run: bool) -> Self {
        let rows = build_rows();
        let scroll = ScrollState::new(rows.len(), 30);
        let status_message = match manager {
            Some(_) => "Welcome to appcart".to_string(),
            None => "No package manager detected: install apt, dnf, or pacman".to_string(),
        };
        Self {
            mode: AppMode::Browse,
            manager,
            dry_run,
            cursor_row: first_selectable(&rows),
            rows,
            selected: vec![false; catalog::entry_count()],
            scroll,
            status_message,
            install_log: Vec::new(),
            log_scroll_offset: 0,
            log_auto_scroll: true,
            install_result: None,
            help_visible: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None, false)
    }
}

fn first_selectable(rows: &[Row]) -> usize {
    rows.iter()
        .position(Row::is_selectable)
        .unwrap_or(0)
}

impl AppState {
    /// Flat catalog index of the entry under the cursor.
    pub fn cursor_entry_index(&self) -> Option<usize> {
        match self.rows.get(self.cursor_row) {
            Some(Row::Entry { index, .. }) => Some(*index),
            _ => None,
        }
    }

    /// The entry under the cursor.
    pub fn cursor_entry(&self) -> Option<&'static AppEntry> {
        match self.rows.get(self.cursor_row) {
            Some(Row::Entry { entry, .. }) => Some(*entry),
            _ => None,
        }
    }

    /// Move the cursor to the next selectable row, scrolling to match.
    pub fn cursor_down(&mut self) {
        if let Some(next) = self.rows[self.cursor_row + 1..]
            .iter()
            .position(Row::is_selectable)
        {
            self.cursor_row += next + 1;
            self.scroll.scroll_to(self.cursor_row);
        }
    }

    /// Move the cursor to the previous selectable row, scrolling to match.
    ///
    /// When the previous selectable row is the first entry of a category,
    /// the viewport is pulled one extra row up so the separator shows too.
    pub fn cursor_up(&mut self) {
        if let Some(prev) = self.rows[..self.cursor_row]
            .iter()
            .rposition(Row::is_selectable)
        {
            self.cursor_row = prev;
            let target = if prev > 0 && !self.rows[prev - 1].is_selectable() {
                prev - 1
            } else {
                prev
            };
            self.scroll.scroll_to(target);
        }
    }

    /// Move the cursor a viewport's worth of rows down.
    pub fn cursor_page_down(&mut self) {
        for _ in 0..self.scroll.visible_items().saturating_sub(1) {
            self.cursor_down();
        }
    }

    /// Move the cursor a viewport's worth of rows up.
    pub fn cursor_page_up(&mut self) {
        for _ in 0..self.scroll.visible_items().saturating_sub(1) {
            self.cursor_up();
        }
    }

    /// Jump to the first entry.
    pub fn cursor_home(&mut self) {
        self.cursor_row = first_selectable(&self.rows);
        self.scroll.scroll_to(0);
    }

    /// Jump to the last entry.
    pub fn cursor_end(&mut self) {
        if let Some(last) = self.rows.iter().rposition(Row::is_selectable) {
            self.cursor_row = last;
            self.scroll.scroll_to(last);
        }
    }

    /// Toggle the entry under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(index) = self.cursor_entry_index() {
            self.selected[index] = !self.selected[index];
        }
    }

    /// Select every catalog entry.
    pub fn select_all(&mut self) {
        self.selected.fill(true);
    }

    /// Clear the whole selection.
    pub fn clear_selection(&mut self) {
        self.selected.fill(false);
    }

    /// Number of selected entries.
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// Snapshot the selected entries in catalog order.
    pub fn selected_entries(&self) -> Vec<&'static AppEntry> {
        catalog::entries()
            .enumerate()
            .filter(|(i, _)| self.selected[*i])
            .map(|(_, e)| e)
            .collect()
    }

    /// Append a line to the install log, following output when auto-scroll
    /// is on.
    pub fn push_log(&mut self, line: LogLine) {
        self.install_log.push(line);
        if self.log_auto_scroll {
            self.log_scroll_offset = self.install_log.len().saturating_sub(1);
        }
    }
}
