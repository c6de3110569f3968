//! appcart - Main entry point
//!
//! A terminal checklist of curated Linux applications, grouped by
//! category, installed through whichever of apt/dnf/pacman the host has.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;

use appcart::app::App;
use appcart::catalog;
use appcart::cli::{Cli, Commands};
use appcart::install::{run_blocking, InstallPlan};
use appcart::manager::PackageManager;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::List { json }) => print_catalog(json)?,
        Some(Commands::Detect) => {
            match PackageManager::detect() {
                Some(manager) => println!("{}", manager),
                None => {
                    eprintln!("✗ No supported package manager found (apt, dnf, pacman)");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Install { packages }) => {
            run_headless_install(packages, cli.dry_run)?;
        }
        None => {
            info!("No command specified, launching TUI");
            run_tui(cli.dry_run)?;
        }
    }

    Ok(())
}

/// Print the catalog, plain or as JSON.
fn print_catalog(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::CATALOG)?);
        return Ok(());
    }

    for category in catalog::CATALOG {
        println!("{}", category.name);
        for entry in category.apps {
            println!("  {:<22} {:<18} {}", entry.name, entry.pkg, entry.desc);
        }
        println!();
    }
    Ok(())
}

/// Headless install: resolve the arguments against the catalog and run the
/// install command in the foreground, streaming its output.
fn run_headless_install(
    packages: Vec<String>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = PackageManager::require()?;
    println!("Package manager: {}", manager);

    // Accept catalog display names, catalog package ids, or raw ids.
    let resolved: Vec<String> = packages.iter().map(|arg| catalog::resolve(arg)).collect();

    let plan = InstallPlan::from_packages(manager, resolved, dry_run)?;
    let exit_code = run_blocking(&plan)?;

    if exit_code == 0 {
        info!("Install completed successfully");
        if !dry_run {
            println!("✓ Install completed successfully");
        }
    } else {
        error!("Install failed with exit code {}", exit_code);
        eprintln!("✗ Install failed with exit code {}", exit_code);
        std::process::exit(exit_code.max(1));
    }

    Ok(())
}

/// Run the TUI checklist
fn run_tui(dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Probe before touching the terminal so the header can show the result
    let manager = PackageManager::detect();

    enable_raw_mode()
        .map_err(|e| appcart::error::AppcartError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        appcart::error::AppcartError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).map_err(|e| {
        appcart::error::AppcartError::terminal(format!("Failed to create terminal: {}", e))
    })?;

    let mut app = App::new(manager, dry_run);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
