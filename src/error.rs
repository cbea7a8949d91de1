//! Error types for the reconkit CLI
//!
//! Shared by destination resolution, configuration loading, and the
//! install handlers.

use thiserror::Error;

/// Errors that can occur while running reconkit commands
#[derive(Debug, Error)]
pub enum ReconKitError {
    /// No usable install directory: GOBIN is unset and the home directory
    /// could not be determined
    #[error("could not determine home directory - set GOBIN to choose an install directory")]
    HomeDirUnavailable,

    /// A `--tool` filter named a tool that is not in the catalog
    #[error("unknown tool: {0} (run `reconkit list` to see available tools)")]
    UnknownTool(String),

    /// Two catalog entries share the same name
    #[error("duplicate tool entry: {0}")]
    DuplicateTool(String),

    /// An explicitly passed configuration file could not be parsed
    #[error("failed to parse {path}: {reason}")]
    ConfigParse {
        /// Path of the offending file
        path: String,
        /// Parser error text
        reason: String,
    },

    /// One or more installs failed and `--strict` was requested
    #[error("{failed} of {total} tools failed to install")]
    InstallsFailed {
        /// Number of entries that did not install
        failed: usize,
        /// Number of entries attempted
        total: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for reconkit operations
pub type Result<T> = std::result::Result<T, ReconKitError>;
