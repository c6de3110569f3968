//! Static application catalog
//!
//! The catalog is a hardcoded mapping from category name to an ordered list
//! of installable applications. Entries carry a display name, a one-line
//! description, and the package identifier handed to the package manager.
//!
//! Declaration order is display order; the flat index over all entries is
//! the selection index used by the TUI checklist.

use serde::Serialize;

/// A single installable application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    /// Display name shown in the checklist
    pub name: &'static str,
    /// One-line description
    pub desc: &'static str,
    /// Package identifier passed to the package manager
    pub pkg: &'static str,
}

/// A named group of applications.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub apps: &'static [AppEntry],
}

macro_rules! entry {
    ($name:expr, $desc:expr, $pkg:expr) => {
        AppEntry {
            name: $name,
            desc: $desc,
            pkg: $pkg,
        }
    };
}

/// The full application catalog, grouped by category.
pub static CATALOG: &[Category] = &[
    Category {
        name: "Development",
        apps: &[
            entry!("git", "Distributed version control system", "git"),
            entry!("vim", "Advanced text editor", "vim"),
            entry!("neovim", "Hyperextensible Vim-based text editor", "neovim"),
            entry!("VSCode", "Visual Studio Code editor", "code"),
            entry!("Python3", "Python programming language", "python3"),
            entry!("Node.js", "JavaScript runtime", "nodejs"),
            entry!("Docker", "Container platform", "docker.io"),
            entry!("Build Essential", "Compilers and build tools", "build-essential"),
            entry!("GCC", "GNU Compiler Collection", "gcc"),
            entry!("Make", "Build automation tool", "make"),
        ],
    },
    Category {
        name: "Multimedia",
        apps: &[
            entry!("VLC", "Versatile media player", "vlc"),
            entry!("GIMP", "Image manipulation program", "gimp"),
            entry!("Inkscape", "Vector graphics editor", "inkscape"),
            entry!("Audacity", "Audio editor and recorder", "audacity"),
            entry!("OBS Studio", "Video recording and streaming", "obs-studio"),
            entry!("Blender", "3D creation suite", "blender"),
            entry!("Kdenlive", "Video editing suite", "kdenlive"),
            entry!("FFmpeg", "Multimedia framework", "ffmpeg"),
        ],
    },
    Category {
        name: "Internet & Communication",
        apps: &[
            entry!("Firefox", "Web browser", "firefox"),
            entry!("Chromium", "Open-source web browser", "chromium-browser"),
            entry!("Thunderbird", "Email client", "thunderbird"),
            entry!("Telegram", "Cloud-based messaging app", "telegram-desktop"),
            entry!("Discord", "Voice and text chat platform", "discord"),
            entry!("FileZilla", "FTP client", "filezilla"),
            entry!("qBittorrent", "BitTorrent client", "qbittorrent"),
            entry!("Curl", "Command line tool for transfers", "curl"),
            entry!("Wget", "Network downloader", "wget"),
        ],
    },
    Category {
        name: "System Tools",
        apps: &[
            entry!("htop", "Interactive process viewer", "htop"),
            entry!("ncdu", "Disk usage analyzer", "ncdu"),
            entry!("tmux", "Terminal multiplexer", "tmux"),
            entry!("screen", "Terminal multiplexer", "screen"),
            entry!("GParted", "Partition editor", "gparted"),
            entry!("Synaptic", "Package manager GUI", "synaptic"),
            entry!("Bleachbit", "System cleaner", "bleachbit"),
            entry!("Timeshift", "System restore utility", "timeshift"),
            entry!("KeePassXC", "Password manager", "keepassxc"),
        ],
    },
    Category {
        name: "Productivity",
        apps: &[
            entry!("LibreOffice", "Office suite", "libreoffice"),
            entry!("Okular", "Document viewer", "okular"),
            entry!("Evince", "PDF viewer", "evince"),
            entry!("Calibre", "E-book management", "calibre"),
            entry!("Notion (unofficial)", "Note-taking app", "notion-app"),
            entry!("Obsidian", "Knowledge base", "obsidian"),
            entry!("Joplin", "Note taking app", "joplin"),
        ],
    },
    Category {
        name: "Gaming",
        apps: &[
            entry!("Steam", "Gaming platform", "steam"),
            entry!("Lutris", "Gaming platform", "lutris"),
            entry!("Wine", "Windows compatibility layer", "wine"),
            entry!("GameMode", "Gaming optimizations", "gamemode"),
        ],
    },
];

/// Iterate all entries in catalog order, flattened across categories.
pub fn entries() -> impl Iterator<Item = &'static AppEntry> {
    CATALOG.iter().flat_map(|c| c.apps.iter())
}

/// Total number of entries across all categories.
pub fn entry_count() -> usize {
    CATALOG.iter().map(|c| c.apps.len()).sum()
}

/// Look up an entry by package identifier.
pub fn find_by_pkg(pkg: &str) -> Option<&'static AppEntry> {
    entries().find(|e| e.pkg == pkg)
}

/// Look up an entry by display name (case-insensitive).
///
/// Used by the headless `install` subcommand so users can type either the
/// package identifier or the name shown in the checklist.
pub fn find_by_name(name: &str) -> Option<&'static AppEntry> {
    entries().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Resolve a user-supplied argument to a package identifier.
///
/// Catalog package ids win, then display names (case-insensitive);
/// anything else passes through unchanged so the package manager gets to
/// decide whether it exists.
pub fn resolve(arg: &str) -> String {
    match find_by_pkg(arg).or_else(|| find_by_name(arg)) {
        Some(entry) => entry.pkg.to_string(),
        None => {
            log::info!("{} is not in the catalog, passing through as-is", arg);
            arg.to_string()
        }
    }
}

/// The entry at a given flat index, together with its category name.
pub fn entry_at(index: usize) -> Option<(&'static str, &'static AppEntry)> {
    let mut remaining = index;
    for category in CATALOG {
        if remaining < category.apps.len() {
            return Some((category.name, &category.apps[remaining]));
        }
        remaining -= category.apps.len();
    }
    None
}
