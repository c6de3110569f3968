//! Install command execution
//!
//! Runs the package manager install command on a dedicated background
//! thread so the TUI thread stays responsive. Stdout and stderr are
//! streamed line-by-line over an mpsc channel and rendered in the log
//! pane. In dry-run mode the command line is reported instead of run.
//!
//! Failure handling is deliberately thin: the raw process exit status is
//! surfaced to the caller. Retries, rollback, and dependency resolution
//! belong to the package manager, not to us.

use crate::catalog::AppEntry;
use crate::error::{AppcartError, Result};
use crate::manager::{display_command, PackageManager};
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc::Sender;
use std::thread;

/// Messages sent from the install thread to the main UI thread
#[derive(Debug)]
pub enum InstallMessage {
    /// A line of stdout output
    Stdout(String),
    /// A line of stderr output
    Stderr(String),
    /// Install completed; carries the raw exit status
    Complete { success: bool, exit_code: Option<i32> },
    /// Install failed to start
    Error(String),
}

/// A fully-resolved install: the detected manager, the selected package
/// identifiers, and whether this is a dry run.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub manager: PackageManager,
    pub packages: Vec<String>,
    pub dry_run: bool,
}

impl InstallPlan {
    /// Build a plan from selected catalog entries.
    ///
    /// Rejects an empty selection; the TUI turns that into a status-line
    /// warning rather than an error exit.
    pub fn from_entries(
        manager: PackageManager,
        entries: &[&AppEntry],
        dry_run: bool,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(AppcartError::install("no packages selected"));
        }
        Ok(Self {
            manager,
            packages: entries.iter().map(|e| e.pkg.to_string()).collect(),
            dry_run,
        })
    }

    /// Build a plan from raw package identifiers (headless mode).
    pub fn from_packages(
        manager: PackageManager,
        packages: Vec<String>,
        dry_run: bool,
    ) -> Result<Self> {
        if packages.is_empty() {
            return Err(AppcartError::install("no packages given"));
        }
        Ok(Self {
            manager,
            packages,
            dry_run,
        })
    }

    /// The full argv this plan will execute.
    pub fn argv(&self) -> Vec<String> {
        self.manager.install_argv(&self.packages)
    }

    /// The command as a display string for the log pane and dry-run output.
    pub fn command_line(&self) -> String {
        display_command(&self.argv())
    }
}

/// Spawn the install on a background thread, streaming output to `tx`.
///
/// Send failures mean the receiver (the TUI) is gone, so the reader
/// threads just stop. The child is left to finish; with the receiver gone
/// there is nobody to report to.
pub fn spawn_install(plan: InstallPlan, tx: Sender<InstallMessage>) {
    thread::spawn(move || run_install(plan, &tx));
}

fn run_install(plan: InstallPlan, tx: &Sender<InstallMessage>) {
    let _ = tx.send(InstallMessage::Stdout(format!(
        "Command: {}",
        plan.command_line()
    )));

    if plan.dry_run {
        log::info!("Dry run, not executing: {}", plan.command_line());
        let _ = tx.send(InstallMessage::Stdout(
            "Would execute command (dry-run mode)".to_string(),
        ));
        let _ = tx.send(InstallMessage::Stdout(format!(
            "Dependencies would be auto-resolved by {}",
            plan.manager
        )));
        let _ = tx.send(InstallMessage::Complete {
            success: true,
            exit_code: None,
        });
        return;
    }

    let argv = plan.argv();
    log::info!("Executing install command: {}", plan.command_line());

    let child_result = Command::new(&argv[0])
        .args(&argv[1..])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn();

    let mut child = match child_result {
        Ok(c) => c,
        Err(e) => {
            let _ = tx.send(InstallMessage::Error(format!(
                "Failed to start {}: {}",
                argv[0], e
            )));
            return;
        }
    };

    // Stream stdout in a separate thread
    let stdout_tx = tx.clone();
    let stdout_handle = child.stdout.take().map(|stdout| {
        thread::spawn(move || {
            let reader = BufReader::new(stdout);
            for line in reader.lines().map_while(std::result::Result::ok) {
                if stdout_tx.send(InstallMessage::Stdout(line)).is_err() {
                    break; // Receiver dropped
                }
            }
        })
    });

    // Stream stderr in a separate thread
    let stderr_tx = tx.clone();
    let stderr_handle = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            let reader = BufReader::new(stderr);
            for line in reader.lines().map_while(std::result::Result::ok) {
                if stderr_tx.send(InstallMessage::Stderr(line)).is_err() {
                    break; // Receiver dropped
                }
            }
        })
    });

    if let Some(h) = stdout_handle {
        let _ = h.join();
    }
    if let Some(h) = stderr_handle {
        let _ = h.join();
    }

    match child.wait() {
        Ok(status) => {
            log::info!("Install command exited with status: {:?}", status.code());
            let _ = tx.send(InstallMessage::Complete {
                success: status.success(),
                exit_code: status.code(),
            });
        }
        Err(e) => {
            let _ = tx.send(InstallMessage::Error(format!(
                "Failed to wait for install command: {}",
                e
            )));
        }
    }
}

/// Run the plan in the foreground, streaming output to this process's
/// stdout/stderr. Used by the headless `install` subcommand.
///
/// Returns the child's exit code (0 for a dry run).
pub fn run_blocking(plan: &InstallPlan) -> Result<i32> {
    println!("Command: {}", plan.command_line());

    if plan.dry_run {
        println!("Would execute command (dry-run mode)");
        return Ok(0);
    }

    let argv = plan.argv();
    let mut child = Command::new(&argv[0])
        .args(&argv[1..])
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| AppcartError::install(format!("failed to start {}: {}", argv[0], e)))?;

    if let Some(stdout) = child.stdout.take() {
        let reader = BufReader::new(stdout);
        for line in reader.lines() {
            match line {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    let _ = child.wait();
                    return Err(e.into());
                }
            }
        }
    }

    let status = child.wait()?;
    Ok(status.code().unwrap_or(-1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::mpsc;

    #[test]
    fn test_plan_rejects_empty_selection() {
        let err = InstallPlan::from_entries(PackageManager::Apt, &[], false).unwrap_err();
        assert!(err.to_string().contains("no packages selected"));

        let err = InstallPlan::from_packages(PackageManager::Dnf, vec![], true).unwrap_err();
        assert!(err.to_string().contains("no packages given"));
    }

    #[test]
    fn test_plan_from_entries_preserves_order() {
        let git = catalog::find_by_pkg("git").unwrap();
        let vlc = catalog::find_by_pkg("vlc").unwrap();
        let plan = InstallPlan::from_entries(PackageManager::Apt, &[git, vlc], false).unwrap();
        assert_eq!(plan.packages, vec!["git", "vlc"]);
        assert_eq!(plan.command_line(), "sudo apt install -y git vlc");
    }

    #[test]
    fn test_dry_run_emits_preview_and_completes() {
        let plan = InstallPlan::from_packages(
            PackageManager::Pacman,
            vec!["htop".to_string()],
            true,
        )
        .unwrap();
        let (tx, rx) = mpsc::channel();
        run_install(plan, &tx);
        drop(tx);

        let messages: Vec<InstallMessage> = rx.iter().collect();
        assert!(matches!(
            messages.first(),
            Some(InstallMessage::Stdout(line)) if line == "Command: sudo pacman -S --noconfirm htop"
        ));
        assert!(messages
            .iter()
            .any(|m| matches!(m, InstallMessage::Stdout(line) if line.contains("dry-run mode"))));
        assert!(matches!(
            messages.last(),
            Some(InstallMessage::Complete {
                success: true,
                exit_code: None
            })
        ));
    }

    #[test]
    fn test_spawn_install_dry_run_completes_over_channel() {
        let plan = InstallPlan::from_packages(
            PackageManager::Apt,
            vec!["git".to_string(), "vim".to_string()],
            true,
        )
        .unwrap();
        let (tx, rx) = mpsc::channel();
        spawn_install(plan, tx);

        // The channel closes when the install thread finishes.
        let messages: Vec<InstallMessage> = rx.iter().collect();
        assert!(matches!(
            messages.last(),
            Some(InstallMessage::Complete { success: true, .. })
        ));
    }
}
