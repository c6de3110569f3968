use clap::{Parser, Subcommand};

/// appcart - a terminal checklist for installing Linux applications
#[derive(Parser)]
#[command(name = "appcart")]
#[command(about = "Install curated Linux applications by category, via apt/dnf/pacman")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print the install command instead of executing it.
    ///
    /// Package manager detection still runs so the preview shows the real
    /// command this host would use.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the application catalog
    List {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the detected package manager
    Detect,
    /// Install packages without the TUI
    Install {
        /// Catalog entries (by display name or package id) to install
        #[arg(required = true)]
        packages: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
