//! Module manifest resolution.
//!
//! Reads `go.mod` at the scan root and extracts the module's canonical
//! import path. Nothing else in the manifest matters to the diagram, so the
//! parse is a minimal line scan rather than a full modfile grammar.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to read module manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no module directive in {0}")]
    MissingModule(PathBuf),
}

/// Resolved module identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Canonical root import path, e.g. `example.com/app`.
    pub path: String,
    /// Manifest file the path came from.
    pub manifest: PathBuf,
}

/// Resolve the module rooted at `root` from its `go.mod`.
pub fn resolve_module(root: &Path) -> Result<ModuleInfo, ResolveError> {
    let manifest = root.join("go.mod");
    let data = fs::read_to_string(&manifest).map_err(|source| ResolveError::Io {
        path: manifest.clone(),
        source,
    })?;

    for line in data.lines() {
        let line = strip_comment(line).trim();
        let Some(rest) = line.strip_prefix("module") else {
            continue;
        };
        // Require a separator so `modulefoo` is not mistaken for a
        // directive.
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let path = rest.trim().trim_matches('"');
        if !path.is_empty() {
            return Ok(ModuleInfo {
                path: path.to_string(),
                manifest,
            });
        }
    }

    Err(ResolveError::MissingModule(manifest))
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}
