//! Canonical registry of the reconnaissance tools reconkit installs
//!
//! When adding or removing a tool, update ONLY the `BUILTIN_TOOLS` table
//! below. Extra entries can also be supplied through `[[tools]]` in
//! `.reconkit.toml`.

use crate::error::{ReconKitError, Result};
use serde::{Deserialize, Serialize};

/// Canonical list of built-in tools: binary name and `go install` source
pub const BUILTIN_TOOLS: &[(&str, &str)] = &[
    ("subfinder", "github.com/projectdiscovery/subfinder/v2/cmd/subfinder@latest"),
    ("httpx", "github.com/projectdiscovery/httpx/cmd/httpx@latest"),
    ("naabu", "github.com/projectdiscovery/naabu/v2/cmd/naabu@latest"),
    ("nuclei", "github.com/projectdiscovery/nuclei/v2/cmd/nuclei@latest"),
    ("katana", "github.com/projectdiscovery/katana/cmd/katana@latest"),
    ("notify", "github.com/projectdiscovery/notify/cmd/notify@latest"),
];

/// One installable tool: the binary name it produces and the module path
/// handed to the external installer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,
    pub source: String,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Immutable, name-sorted collection of tool entries
///
/// Sorting at construction keeps install order and status output
/// reproducible regardless of where the entries came from.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ToolEntry>,
}

impl Catalog {
    /// Catalog holding only the built-in tools
    pub fn builtin() -> Self {
        let entries = BUILTIN_TOOLS
            .iter()
            .map(|(name, source)| ToolEntry::new(*name, *source))
            .collect();
        // The built-in table is known to be duplicate-free
        Self::from_entries(entries).expect("built-in catalog has unique names")
    }

    /// Build a catalog from arbitrary entries, sorted by name
    ///
    /// Fails with [`ReconKitError::DuplicateTool`] when two entries share
    /// a name.
    pub fn from_entries(mut entries: Vec<ToolEntry>) -> Result<Self> {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        for pair in entries.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(ReconKitError::DuplicateTool(pair[0].name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Catalog extended with additional entries (e.g. from config)
    pub fn extended_with(&self, extra: Vec<ToolEntry>) -> Result<Self> {
        let mut entries = self.entries.clone();
        entries.extend(extra);
        Self::from_entries(entries)
    }

    /// Restrict the catalog to the named tools
    ///
    /// Fails with [`ReconKitError::UnknownTool`] for a name with no entry.
    pub fn select(&self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self.clone());
        }
        for name in names {
            if !self.entries.iter().any(|e| &e.name == name) {
                return Err(ReconKitError::UnknownTool(name.clone()));
            }
        }
        let entries = self
            .entries
            .iter()
            .filter(|e| names.contains(&e.name))
            .cloned()
            .collect();
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_sorted_and_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_TOOLS.len());

        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let entries = vec![
            ToolEntry::new("httpx", "example.com/a@latest"),
            ToolEntry::new("httpx", "example.com/b@latest"),
        ];
        let err = Catalog::from_entries(entries).unwrap_err();
        assert!(matches!(err, ReconKitError::DuplicateTool(name) if name == "httpx"));
    }

    #[test]
    fn extension_collides_with_builtin_name() {
        let extra = vec![ToolEntry::new("nuclei", "example.com/fork/nuclei@latest")];
        let err = Catalog::builtin().extended_with(extra).unwrap_err();
        assert!(matches!(err, ReconKitError::DuplicateTool(name) if name == "nuclei"));
    }

    #[test]
    fn select_keeps_only_named_tools() {
        let catalog = Catalog::builtin()
            .select(&["naabu".to_string(), "httpx".to_string()])
            .unwrap();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["httpx", "naabu"]);
    }

    #[test]
    fn select_unknown_tool_fails() {
        let err = Catalog::builtin().select(&["nmap".to_string()]).unwrap_err();
        assert!(matches!(err, ReconKitError::UnknownTool(name) if name == "nmap"));
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let catalog = Catalog::builtin().select(&[]).unwrap();
        assert_eq!(catalog.len(), BUILTIN_TOOLS.len());
    }
}
