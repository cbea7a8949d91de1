//! Presence detection for already-installed tools

use crate::common::command_utils::is_command_available;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where (if anywhere) an installed tool was found
#[derive(Debug, Clone, Serialize)]
pub struct ToolPresence {
    pub name: String,
    pub installed: bool,
    /// Binary path when the tool was found in the destination directory;
    /// `None` when it only answered on PATH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Check whether a tool is already present.
///
/// The destination directory is checked first, then PATH via a version
/// probe. No version parsing; the `status` display only needs presence.
pub fn detect_tool(name: &str, destination: &Path) -> ToolPresence {
    let candidate = destination.join(name);
    if candidate.is_file() {
        return ToolPresence {
            name: name.to_string(),
            installed: true,
            path: Some(candidate),
        };
    }

    if is_command_available(name, "-version") || is_command_available(name, "--version") {
        return ToolPresence {
            name: name.to_string(),
            installed: true,
            path: None,
        };
    }

    ToolPresence {
        name: name.to_string(),
        installed: false,
        path: None,
    }
}
