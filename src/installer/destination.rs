//! Resolution of the directory installed binaries land in

use crate::error::{ReconKitError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable the Go toolchain honors for the binary directory
pub const GOBIN_ENV: &str = "GOBIN";

/// Resolve the destination directory for installed binaries.
///
/// Precedence: an explicit `--gobin` flag, a non-empty `GOBIN` environment
/// variable (returned verbatim), a configured override, then
/// `<home>/go/bin`. Callers resolve once per run and share the result
/// across every install.
pub fn resolve_destination(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<PathBuf> {
    resolve_from(
        explicit,
        env::var(GOBIN_ENV).ok(),
        configured,
        dirs::home_dir(),
    )
}

fn resolve_from(
    explicit: Option<&Path>,
    gobin_env: Option<String>,
    configured: Option<&Path>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(gobin) = gobin_env {
        if !gobin.is_empty() {
            return Ok(PathBuf::from(gobin));
        }
    }
    if let Some(dir) = configured {
        return Ok(dir.to_path_buf());
    }
    home.map(|h| h.join("go").join("bin"))
        .ok_or(ReconKitError::HomeDirUnavailable)
}
