//! Package manager detection and command construction
//!
//! Detection is a one-time probe at startup: each supported manager is
//! checked for presence by running `<manager> --version` with its output
//! discarded, in priority order (apt, then dnf, then pacman). The first
//! probe that exits successfully wins.

use crate::error::{AppcartError, Result};
use std::process::{Command, Stdio};
use strum::{Display, EnumIter, IntoEnumIterator};

/// A supported system package manager.
///
/// Variant order is detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PackageManager {
    Apt,
    Dnf,
    Pacman,
}

impl PackageManager {
    /// The executable name probed for and invoked.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
        }
    }

    /// The fixed install-command arguments for this manager, excluding the
    /// package names. `sudo` is the argv[0] of every template so the same
    /// command line works for unprivileged users.
    pub fn install_prefix(&self) -> &'static [&'static str] {
        match self {
            Self::Apt => &["sudo", "apt", "install", "-y"],
            Self::Dnf => &["sudo", "dnf", "install", "-y"],
            Self::Pacman => &["sudo", "pacman", "-S", "--noconfirm"],
        }
    }

    /// Build the full install argv for the given package identifiers.
    ///
    /// All selected names are passed as one argument list; dependency
    /// resolution is left entirely to the package manager.
    pub fn install_argv(&self, packages: &[String]) -> Vec<String> {
        let mut argv: Vec<String> = self
            .install_prefix()
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        argv.extend(packages.iter().cloned());
        argv
    }

    /// Probe whether this manager's binary is present and runnable.
    pub fn is_available(&self) -> bool {
        Command::new(self.binary())
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Detect the system package manager, probing in priority order.
    ///
    /// Returns `None` when none of the supported managers is present.
    pub fn detect() -> Option<Self> {
        for manager in Self::iter() {
            if manager.is_available() {
                log::info!("Detected package manager: {}", manager);
                return Some(manager);
            }
            log::debug!("Package manager not found: {}", manager);
        }
        log::warn!("No supported package manager found on this host");
        None
    }

    /// Detect the system package manager, erroring when none is present.
    pub fn require() -> Result<Self> {
        Self::detect().ok_or(AppcartError::NoPackageManager)
    }
}

/// Render an argv as a single shell-style command line for display.
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_priority_order() {
        let order: Vec<PackageManager> = PackageManager::iter().collect();
        assert_eq!(
            order,
            vec![
                PackageManager::Apt,
                PackageManager::Dnf,
                PackageManager::Pacman
            ]
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PackageManager::Apt.to_string(), "apt");
        assert_eq!(PackageManager::Dnf.to_string(), "dnf");
        assert_eq!(PackageManager::Pacman.to_string(), "pacman");
    }

    #[test]
    fn test_install_argv_apt() {
        let argv = PackageManager::Apt.install_argv(&["git".to_string(), "vim".to_string()]);
        assert_eq!(argv, vec!["sudo", "apt", "install", "-y", "git", "vim"]);
    }

    #[test]
    fn test_install_argv_pacman() {
        let argv = PackageManager::Pacman.install_argv(&["htop".to_string()]);
        assert_eq!(argv, vec!["sudo", "pacman", "-S", "--noconfirm", "htop"]);
    }

    #[test]
    fn test_display_command_joins_with_spaces() {
        let argv = PackageManager::Dnf.install_argv(&["vlc".to_string()]);
        assert_eq!(display_command(&argv), "sudo dnf install -y vlc");
    }
}
