//! External process invocation for tool installation

use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// The external package-installation command
pub const INSTALL_COMMAND: &str = "go";

/// Why a single install invocation failed
///
/// Neither case propagates past the entry it belongs to; the install loop
/// records it in the entry's outcome and moves on.
#[derive(Debug, Clone, Error)]
pub enum InstallError {
    /// The installer binary could not be spawned at all
    #[error("failed to launch `{command}`: {reason}")]
    Launch { command: String, reason: String },

    /// The installer ran and reported failure
    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: String },
}

/// Capability for invoking the external install command
///
/// The install loop depends on this trait so tests can substitute a
/// runner returning scripted results instead of launching a toolchain.
pub trait InstallRunner {
    /// Install one source into `destination`, blocking until the external
    /// command terminates.
    fn install(&self, source: &str, destination: &Path) -> std::result::Result<(), InstallError>;
}

/// Runs `go install <source>` with `GOBIN` pointed at the destination
///
/// The child inherits the calling process's environment and streams its
/// stdout/stderr straight to the caller's terminal.
pub struct GoInstallRunner;

impl InstallRunner for GoInstallRunner {
    fn install(&self, source: &str, destination: &Path) -> std::result::Result<(), InstallError> {
        let command = format!("{INSTALL_COMMAND} install {source}");
        debug!("Running `{}` with GOBIN={}", command, destination.display());

        let status = Command::new(INSTALL_COMMAND)
            .args(["install", source])
            .env(super::GOBIN_ENV, destination)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| InstallError::Launch {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::Failed {
                command,
                status: status.to_string(),
            })
        }
    }
}
