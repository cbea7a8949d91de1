//! # Installer Module
//!
//! Handles destination resolution, invocation of the external `go install`
//! command, and the sequential install-and-report loop.

pub mod destination;
pub mod detect;
pub mod install;
pub mod runner;

pub use destination::{GOBIN_ENV, resolve_destination};
pub use detect::{ToolPresence, detect_tool};
pub use install::{InstallOutcome, ToolInstaller};
pub use runner::{GoInstallRunner, InstallError, InstallRunner};
