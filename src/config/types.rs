use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,
    /// Extra tools appended to the built-in catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolConfig>,
}

/// Install configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Destination override; the `--gobin` flag and the `GOBIN`
    /// environment variable take precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gobin: Option<PathBuf>,
    /// Exit non-zero when any tool fails to install
    #[serde(default)]
    pub strict: bool,
}

/// A catalog extension entry from `[[tools]]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    pub name: String,
    pub source: String,
}
