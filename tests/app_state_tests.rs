//! Tests for application state management
//!
//! These tests verify:
//! - AppState default initialization
//! - Checklist row construction and cursor navigation
//! - Selection operations (toggle, select all, clear)
//! - Install log handling

use appcart::app::{build_rows, AppMode, AppState, LogLine, Row};
use appcart::catalog;
use appcart::manager::PackageManager;

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_browse() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Browse);
}

#[test]
fn test_app_state_status_reflects_detection() {
    let state = AppState::new(Some(PackageManager::Apt), false);
    assert!(state.status_message.contains("Welcome"));

    // No manager: the status line carries the warning from the start
    let state = AppState::default();
    assert!(state.status_message.contains("No package manager detected"));
}

#[test]
fn test_app_state_default_nothing_selected() {
    let state = AppState::default();
    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.selected.len(), catalog::entry_count());
}

#[test]
fn test_app_state_default_no_manager_and_no_result() {
    let state = AppState::default();
    assert!(state.manager.is_none());
    assert!(state.install_result.is_none());
    assert!(state.install_log.is_empty());
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_cursor_starts_on_first_entry() {
    let state = AppState::default();
    let entry = state.cursor_entry().expect("cursor should sit on an entry");
    assert_eq!(entry.name, "git");
}

// =============================================================================
// Row Model Tests
// =============================================================================

#[test]
fn test_rows_cover_all_categories_and_entries() {
    let rows = build_rows();
    let categories = rows
        .iter()
        .filter(|r| matches!(r, Row::Category(_)))
        .count();
    let entries = rows.iter().filter(|r| r.is_selectable()).count();

    assert_eq!(categories, catalog::CATALOG.len());
    assert_eq!(entries, catalog::entry_count());
    assert_eq!(rows.len(), categories + entries);
}

#[test]
fn test_rows_start_with_category_separator() {
    let rows = build_rows();
    assert!(matches!(rows[0], Row::Category("Development")));
    assert!(rows[1].is_selectable());
}

#[test]
fn test_row_entry_indices_are_sequential() {
    let mut expected = 0;
    for row in build_rows() {
        if let Row::Entry { index, .. } = row {
            assert_eq!(index, expected);
            expected += 1;
        }
    }
    assert_eq!(expected, catalog::entry_count());
}

// =============================================================================
// Cursor Navigation Tests
// =============================================================================

#[test]
fn test_cursor_down_skips_category_rows() {
    let mut state = AppState::default();

    // Walk to the last Development entry, then one more step
    for _ in 0..9 {
        state.cursor_down();
    }
    assert_eq!(state.cursor_entry().unwrap().name, "Make");

    state.cursor_down();
    assert_eq!(state.cursor_entry().unwrap().name, "VLC");
}

#[test]
fn test_cursor_up_stops_at_first_entry() {
    let mut state = AppState::default();
    state.cursor_up();
    assert_eq!(state.cursor_entry().unwrap().name, "git");
}

#[test]
fn test_cursor_end_and_home() {
    let mut state = AppState::default();
    state.cursor_end();
    assert_eq!(state.cursor_entry().unwrap().name, "GameMode");

    state.cursor_home();
    assert_eq!(state.cursor_entry().unwrap().name, "git");
    assert_eq!(state.scroll.offset(), 0);
}

#[test]
fn test_cursor_down_past_end_stays_put() {
    let mut state = AppState::default();
    state.cursor_end();
    let at_end = state.cursor_row;
    state.cursor_down();
    assert_eq!(state.cursor_row, at_end);
}

// =============================================================================
// Selection Tests
// =============================================================================

#[test]
fn test_toggle_select_clear() {
    let mut state = AppState::default();
    state.toggle_current();
    assert_eq!(state.selected_count(), 1);

    state.select_all();
    assert_eq!(state.selected_count(), catalog::entry_count());

    state.clear_selection();
    assert_eq!(state.selected_count(), 0);
}

#[test]
fn test_selected_entries_in_catalog_order() {
    let mut state = AppState::default();

    // Select the third entry first, then the first
    state.cursor_down();
    state.cursor_down();
    state.toggle_current();
    state.cursor_home();
    state.toggle_current();

    let names: Vec<&str> = state.selected_entries().iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["git", "neovim"]);
}

// =============================================================================
// Install Log Tests
// =============================================================================

#[test]
fn test_push_log_follows_output_when_auto_scroll() {
    let mut state = AppState::default();
    for i in 0..10 {
        state.push_log(LogLine::stdout(format!("line {}", i)));
    }
    assert_eq!(state.log_scroll_offset, 9);
}

#[test]
fn test_push_log_holds_position_when_paused() {
    let mut state = AppState::default();
    state.push_log(LogLine::stdout("first"));
    state.log_auto_scroll = false;
    state.push_log(LogLine::stderr("second"));
    assert_eq!(state.log_scroll_offset, 0);
    assert!(state.install_log[1].stderr);
}
