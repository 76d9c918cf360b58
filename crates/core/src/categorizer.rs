//! Package path classification and display labels.
//!
//! Decides what a package path *is* relative to the module root: internal
//! or not, the root package itself or a subpackage, and how it should be
//! labeled in the diagram. No visibility policy lives here.

/// Check whether an import path names an internal package.
///
/// A package is internal when one of its path segments is literally
/// `internal`. Such packages are, by Go convention, private to their
/// nearest non-internal ancestor.
pub fn is_internal(path: &str) -> bool {
    path == "internal" || path.ends_with("/internal") || path.contains("/internal/")
}

/// Classifies package paths relative to one module root.
#[derive(Debug, Clone)]
pub struct PathCategorizer {
    module: String,
}

impl PathCategorizer {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// True for the module root package itself.
    pub fn is_root(&self, path: &str) -> bool {
        path == self.module
    }

    /// Path relative to the module root: `.` for the root package,
    /// otherwise the import path with the module prefix and any trailing
    /// slash removed.
    pub fn relative(&self, path: &str) -> String {
        if self.is_root(path) {
            return ".".to_string();
        }
        let rel = path
            .strip_prefix(&self.module)
            .and_then(|r| r.strip_prefix('/'))
            .unwrap_or(path);
        rel.trim_end_matches('/').to_string()
    }

    /// Display label for a package.
    ///
    /// The root package renders as `(<last segment of the module path>)`;
    /// every other package as its relative path with one segment per line,
    /// so deeper packages read as taller boxes.
    pub fn label(&self, path: &str) -> String {
        if self.is_root(path) {
            let last = self.module.rsplit('/').next().unwrap_or(&self.module);
            return format!("({})", last);
        }
        self.relative(path).replace('/', "\n")
    }
}
