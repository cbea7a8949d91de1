//! The sequential install-and-report loop

use super::runner::{InstallError, InstallRunner};
use crate::catalog::ToolEntry;
use std::path::{Path, PathBuf};

/// Result of one install attempt; exactly one is produced per entry per run
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub tool: ToolEntry,
    pub error: Option<InstallError>,
}

impl InstallOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Drives the external installer over a catalog, one tool at a time
///
/// The destination is resolved once by the caller and shared read-only by
/// every install in the run.
pub struct ToolInstaller<'a, R: InstallRunner> {
    runner: &'a R,
    destination: &'a Path,
}

impl<'a, R: InstallRunner> ToolInstaller<'a, R> {
    pub fn new(runner: &'a R, destination: &'a Path) -> Self {
        Self { runner, destination }
    }

    /// Full path the named tool's binary ends up at
    pub fn binary_path(&self, name: &str) -> PathBuf {
        self.destination.join(name)
    }

    /// Install every entry in order, blocking on each one.
    ///
    /// Failure of one entry never aborts the loop; it is reported and
    /// recorded in that entry's outcome.
    pub fn install_all(&self, tools: &[ToolEntry]) -> Vec<InstallOutcome> {
        let mut outcomes = Vec::with_capacity(tools.len());

        for tool in tools {
            println!("🔧 Installing {}...", tool.name);

            match self.runner.install(&tool.source, self.destination) {
                Ok(()) => {
                    println!(
                        "✅ {} installed successfully at {}",
                        tool.name,
                        self.binary_path(&tool.name).display()
                    );
                    outcomes.push(InstallOutcome {
                        tool: tool.clone(),
                        error: None,
                    });
                }
                Err(e) => {
                    eprintln!("❌ Failed to install {}: {}", tool.name, e);
                    outcomes.push(InstallOutcome {
                        tool: tool.clone(),
                        error: Some(e),
                    });
                }
            }
        }

        outcomes
    }
}
