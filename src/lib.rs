//! appcart library
//!
//! Core functionality for the terminal application checklist installer:
//! a static catalog of curated packages, apt/dnf/pacman detection, and a
//! streaming install runner, all rendered through a ratatui checklist.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod install;
pub mod manager;
pub mod scrolling;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, LogLine, Row};
pub use catalog::{AppEntry, Category, CATALOG};
pub use error::{AppcartError, Result};
pub use install::{InstallMessage, InstallPlan};
pub use manager::PackageManager;
pub use scrolling::ScrollState;
