//! # Reconkit
//!
//! A Rust-based command-line tool that bootstraps a Go reconnaissance
//! toolset (subfinder, httpx, naabu, nuclei, katana, notify) by driving
//! `go install` for each tool in a curated catalog.
//!
//! ## Features
//!
//! - **Curated Catalog**: A built-in, name-sorted tool table, extensible
//!   through `.reconkit.toml`
//! - **Validated Destination**: `GOBIN` override honored verbatim, with a
//!   checked `~/go/bin` fallback
//! - **Sequential Installs**: One blocking `go install` per tool; a failed
//!   tool never aborts the rest of the run
//! - **Status Reporting**: Per-tool start/success/failure lines plus a
//!   `status` subcommand for what is already installed
//!
//! ## Example
//!
//! ```rust,no_run
//! use reconkit::catalog::Catalog;
//! use reconkit::installer::{GoInstallRunner, ToolInstaller, resolve_destination};
//!
//! # fn main() -> reconkit::Result<()> {
//! let destination = resolve_destination(None, None)?;
//! let installer = ToolInstaller::new(&GoInstallRunner, &destination);
//! let outcomes = installer.install_all(Catalog::builtin().entries());
//! println!("{} attempted", outcomes.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod installer;

// Re-export commonly used types and functions
pub use catalog::{Catalog, ToolEntry};
pub use error::{ReconKitError, Result};
pub use installer::{InstallOutcome, ToolInstaller, resolve_destination};

use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Install {
            tools,
            gobin,
            dry_run,
            strict,
            yes,
        } => handlers::handle_install(tools, gobin, dry_run, strict, yes, config),
        Commands::List { format } => handlers::handle_list(format, config),
        Commands::Status { gobin, format } => handlers::handle_status(gobin, format, config),
    }
}
