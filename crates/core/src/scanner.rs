//! Package discovery.
//!
//! Walks the module tree, decides which directories hold buildable Go code,
//! and extracts each package's in-module imports. Directories without Go
//! sources are skipped silently; I/O failures are fatal to the run.

use crate::config::ScanConfig;
use crate::models::ScannedPackage;
use crate::parser::{ImportParser, ParserError};
use crate::resolver::ModuleInfo;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to walk source tree: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("parser error: {0}")]
    ParserError(#[from] ParserError),
}

/// Walks a module tree and extracts per-package import lists.
pub struct PackageScanner {
    config: ScanConfig,
}

impl PackageScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan the configured root, returning one entry per buildable package,
    /// sorted by import path.
    pub fn scan(&self, module: &ModuleInfo) -> Result<Vec<ScannedPackage>, ScanError> {
        let parser = ImportParser::new()?;
        let dirs = self.find_package_dirs()?;

        // Parse directories in parallel if configured; graph construction
        // happens later, strictly after the whole scan is done.
        let results: Vec<Result<Option<ScannedPackage>, ScanError>> = if self.config.threads == 1 {
            dirs.iter()
                .map(|dir| self.parse_package_dir(dir, module, &parser))
                .collect()
        } else {
            let pool = if self.config.threads > 0 {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(self.config.threads)
                    .build()
                    .ok()
            } else {
                None
            };

            match pool {
                Some(pool) => pool.install(|| {
                    dirs.par_iter()
                        .map(|dir| self.parse_package_dir(dir, module, &parser))
                        .collect()
                }),
                None => dirs
                    .par_iter()
                    .map(|dir| self.parse_package_dir(dir, module, &parser))
                    .collect(),
            }
        };

        let mut packages = Vec::new();
        for result in results {
            if let Some(pkg) = result? {
                packages.push(pkg);
            }
        }

        packages.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(packages)
    }

    /// Collect candidate package directories, pruning dotted and
    /// underscore-prefixed directories and the top-level vendor tree.
    fn find_package_dirs(&self) -> Result<Vec<PathBuf>, ScanError> {
        let vendor = self.config.root.join("vendor");

        let walker = WalkDir::new(&self.config.root)
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !(name.starts_with('.') || name.starts_with('_') || entry.path() == vendor)
            });

        let mut dirs = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        Ok(dirs)
    }

    /// Parse one directory; `None` when it holds no buildable Go code.
    fn parse_package_dir(
        &self,
        dir: &Path,
        module: &ModuleInfo,
        parser: &ImportParser,
    ) -> Result<Option<ScannedPackage>, ScanError> {
        let sources = go_sources(dir)?;
        if sources.is_empty() {
            return Ok(None);
        }

        let mut imports = BTreeSet::new();
        for file in &sources {
            let content = fs::read_to_string(file)?;
            for dep in parser.extract(&content) {
                if in_module(&module.path, &dep) {
                    imports.insert(dep);
                }
            }
        }

        Ok(Some(ScannedPackage {
            path: self.import_path(dir, module),
            imports,
        }))
    }

    /// Import path for a package directory under the scan root.
    fn import_path(&self, dir: &Path, module: &ModuleInfo) -> String {
        match dir.strip_prefix(&self.config.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => {
                let rel = rel.to_string_lossy().replace('\\', "/");
                format!("{}/{}", module.path, rel)
            }
            _ => module.path.clone(),
        }
    }
}

/// Buildable Go files directly inside `dir`: `.go` sources that are not
/// tests and not dot/underscore-prefixed.
fn go_sources(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".go")
            || name.ends_with("_test.go")
            || name.starts_with('.')
            || name.starts_with('_')
        {
            continue;
        }
        sources.push(entry.path());
    }
    sources.sort();
    Ok(sources)
}

/// Whether `dep` lies inside the module rooted at `module`.
pub fn in_module(module: &str, dep: &str) -> bool {
    dep == module
        || dep
            .strip_prefix(module)
            .map_or(false, |rest| rest.starts_with('/'))
}
