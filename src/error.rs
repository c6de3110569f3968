//! Error handling module for appcart
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for appcart
#[derive(Error, Debug)]
pub enum AppcartError {
    /// IO errors (terminal, process spawning, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No supported package manager found on this host
    #[error("No supported package manager found (looked for apt, dnf, pacman)")]
    NoPackageManager,

    /// Package install command failures
    #[error("Install failed: {0}")]
    Install(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for appcart operations
pub type Result<T> = std::result::Result<T, AppcartError>;

// Convenient error constructors
impl AppcartError {
    /// Create an install error
    pub fn install(msg: impl Into<String>) -> Self {
        Self::Install(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppcartError::install("apt exited with code 100");
        assert_eq!(err.to_string(), "Install failed: apt exited with code 100");

        let err = AppcartError::NoPackageManager;
        assert!(err.to_string().contains("apt, dnf, pacman"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppcartError = io_err.into();
        assert!(matches!(err, AppcartError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = AppcartError::install("dnf exited with code 1");
        assert!(matches!(err, AppcartError::Install(_)));

        let err = AppcartError::terminal("raw mode failed");
        assert!(matches!(err, AppcartError::Terminal(_)));
    }
}
