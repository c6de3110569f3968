//! Application module
//!
//! Contains the main application logic, state management, and event
//! handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, Row, LogLine)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{build_rows, AppMode, AppState, LogLine, Row};

use crate::error::Result;
use crate::install::{spawn_install, InstallMessage, InstallPlan};
use crate::manager::PackageManager;
use crate::ui::{UiRenderer, RESERVED_ROWS};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Channel sender for install output (cloned to the install thread)
    install_tx: Sender<InstallMessage>,
    /// Channel receiver for install output (polled in the main loop)
    install_rx: Receiver<InstallMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(manager: Option<PackageManager>, dry_run: bool) -> Self {
        info!("Creating new App instance (dry_run={})", dry_run);
        let (install_tx, install_rx) = mpsc::channel();

        Self {
            state: AppState::new(manager, dry_run),
            ui_renderer: UiRenderer::new(),
            install_tx,
            install_rx,
        }
    }

    /// Read-only view of the state, used by tests
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Drain install output messages
            self.poll_install_messages();

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if key_event.kind == KeyEventKind::Press
                            && self.handle_key_event(key_event)
                        {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, height) => {
                        self.state
                            .scroll
                            .update_visible_items(height.saturating_sub(RESERVED_ROWS) as usize);
                    }
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| {
                if self.state.mode == AppMode::Browse
                    || self.state.mode == AppMode::ConfirmInstall
                {
                    let visible = f.area().height.saturating_sub(RESERVED_ROWS);
                    self.state.scroll.update_visible_items(visible as usize);
                    self.state.scroll.scroll_to(self.state.cursor_row);
                }
                self.ui_renderer.render(f, &self.state);
            })?;
        }

        Ok(())
    }

    /// Drain pending install messages into the log pane
    fn poll_install_messages(&mut self) {
        while let Ok(msg) = self.install_rx.try_recv() {
            match msg {
                InstallMessage::Stdout(line) => {
                    self.state.push_log(LogLine::stdout(line));
                }
                InstallMessage::Stderr(line) => {
                    self.state.push_log(LogLine::stderr(line));
                }
                InstallMessage::Complete { success, exit_code } => {
                    info!(
                        "Install finished: success={}, exit_code={:?}",
                        success, exit_code
                    );
                    self.state.install_result = Some((success, exit_code));
                    self.state.push_log(LogLine::stdout(String::new()));
                    if success {
                        self.state
                            .push_log(LogLine::stdout("✓ Install completed successfully"));
                        self.state.status_message = "Install completed".to_string();
                    } else {
                        self.state.push_log(LogLine::stderr(format!(
                            "✗ Install failed with exit code: {}",
                            exit_code.map_or("?".to_string(), |c| c.to_string())
                        )));
                        self.state.status_message = "Install failed".to_string();
                    }
                    self.state.mode = AppMode::Complete;
                }
                InstallMessage::Error(err) => {
                    warn!("Install error: {}", err);
                    self.state.install_result = Some((false, None));
                    self.state.push_log(LogLine::stderr(format!("✗ Error: {}", err)));
                    self.state.status_message = format!("Install error: {}", err);
                    self.state.mode = AppMode::Complete;
                }
            }
        }
    }

    /// Handle keyboard input events. Returns true when the app should exit.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Help overlay swallows input until dismissed
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return false;
        }

        if key_event.code == KeyCode::Char('?') {
            self.state.help_visible = true;
            return false;
        }

        match self.state.mode {
            AppMode::Browse => self.handle_browse_key(key_event),
            AppMode::ConfirmInstall => {
                self.handle_confirm_key(key_event);
                false
            }
            AppMode::Installing => {
                self.handle_log_scroll_key(key_event);
                false
            }
            AppMode::Complete => self.handle_complete_key(key_event),
        }
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.state.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.cursor_down(),
            KeyCode::PageUp => self.state.cursor_page_up(),
            KeyCode::PageDown => self.state.cursor_page_down(),
            KeyCode::Home => self.state.cursor_home(),
            KeyCode::End => self.state.cursor_end(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.state.toggle_current();
                if let Some(entry) = self.state.cursor_entry() {
                    let checked = self
                        .state
                        .cursor_entry_index()
                        .map(|i| self.state.selected[i])
                        .unwrap_or(false);
                    self.state.status_message = format!(
                        "{} {}",
                        if checked { "Selected" } else { "Deselected" },
                        entry.name
                    );
                }
            }
            KeyCode::Char('a') => {
                self.state.select_all();
                self.state.status_message =
                    format!("Selected all {} applications", self.state.selected_count());
            }
            KeyCode::Char('n') => {
                self.state.clear_selection();
                self.state.status_message = "Selection cleared".to_string();
            }
            KeyCode::Char('i') => self.request_install(),
            _ => {}
        }
        false
    }

    /// Validate the selection and open the confirmation dialog.
    fn request_install(&mut self) {
        if self.state.selected_count() == 0 {
            warn!("Install requested with empty selection");
            self.state.status_message = "No applications selected".to_string();
            return;
        }
        if self.state.manager.is_none() {
            warn!("Install requested but no package manager detected");
            self.state.status_message =
                "Package manager not detected: install apt, dnf, or pacman".to_string();
            return;
        }
        self.state.mode = AppMode::ConfirmInstall;
    }

    fn handle_confirm_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter | KeyCode::Char('y') => self.start_install(),
            KeyCode::Esc | KeyCode::Char('n') => {
                self.state.mode = AppMode::Browse;
                self.state.status_message = "Install cancelled".to_string();
            }
            _ => {}
        }
    }

    /// Kick off the install thread and switch to the log view.
    fn start_install(&mut self) {
        let Some(manager) = self.state.manager else {
            // request_install already guards this; drop back to Browse
            self.state.mode = AppMode::Browse;
            return;
        };

        let entries = self.state.selected_entries();
        let plan = match InstallPlan::from_entries(manager, &entries, self.state.dry_run) {
            Ok(plan) => plan,
            Err(e) => {
                self.state.mode = AppMode::Browse;
                self.state.status_message = e.to_string();
                return;
            }
        };

        debug!("Starting install: {}", plan.command_line());

        self.state.install_log.clear();
        self.state.log_scroll_offset = 0;
        self.state.log_auto_scroll = true;
        self.state.install_result = None;

        let mode_line = if plan.dry_run {
            "DRY RUN MODE"
        } else {
            "INSTALLATION MODE"
        };
        self.state.push_log(LogLine::stdout(mode_line));
        self.state.push_log(LogLine::stdout(format!(
            "Starting installation of {} application(s)",
            entries.len()
        )));
        self.state.push_log(LogLine::stdout(String::new()));

        self.state.mode = AppMode::Installing;
        self.state.status_message = "Installing...".to_string();

        spawn_install(plan, self.install_tx.clone());
    }

    /// Manual scrolling in the log pane pauses auto-scroll; End resumes it.
    fn handle_log_scroll_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.log_auto_scroll = false;
                self.state.log_scroll_offset = self.state.log_scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.state.install_log.len().saturating_sub(1);
                if self.state.log_scroll_offset < max {
                    self.state.log_scroll_offset += 1;
                }
                // Back at the bottom: follow new output again
                if self.state.log_scroll_offset == max {
                    self.state.log_auto_scroll = true;
                }
            }
            KeyCode::End => {
                self.state.log_auto_scroll = true;
                self.state.log_scroll_offset =
                    self.state.install_log.len().saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_complete_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char('q') => return true,
            KeyCode::Enter | KeyCode::Esc => {
                self.state.mode = AppMode::Browse;
            }
            _ => self.handle_log_scroll_key(key_event),
        }
        false
    }
}
