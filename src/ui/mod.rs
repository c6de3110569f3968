//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - ASCII header, subtitle, and navigation bar
//! - `browser` - the application checklist and description panel
//! - `install` - install log pane and completion banner
//! - `dialogs` - confirmation dialog and help overlay

mod browser;
mod dialogs;
mod header;
mod install;

pub use browser::RESERVED_ROWS;
pub use header::HeaderRenderer;

use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to
/// specialized submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        // Main layout with nav bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::Browse => {
                browser::render_browser_in_area(f, state, content_area, &self.header);
            }
            AppMode::ConfirmInstall => {
                // Dialog floats over the browse view
                browser::render_browser_in_area(f, state, content_area, &self.header);
                dialogs::render_confirm_dialog(f, state);
            }
            AppMode::Installing | AppMode::Complete => {
                install::render_install_in_area(f, state, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state, nav_bar_area);

        // Help overlay sits on top of everything
        if state.help_visible {
            dialogs::render_help_overlay(f);
        }
    }
}
