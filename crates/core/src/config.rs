use std::collections::BTreeSet;
use std::path::PathBuf;

/// Configuration for one diagram run.
///
/// Built once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory of the module to scan.
    pub root: PathBuf,
    /// Show internal packages that are imported by a visible package.
    pub show_internal: bool,
    /// Module-relative paths hidden exactly.
    pub hide_exact: BTreeSet<String>,
    /// Module-relative paths hidden together with their whole subtree.
    pub hide_subtree: BTreeSet<String>,
    /// Number of parser threads (0 = auto).
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            show_internal: false,
            hide_exact: BTreeSet::new(),
            hide_subtree: BTreeSet::new(),
            threads: 0,
        }
    }
}

impl ScanConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    pub fn with_show_internal(mut self, show: bool) -> Self {
        self.show_internal = show;
        self
    }

    /// Add module-relative paths to the exact-hide set.
    pub fn with_hide_exact<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hide_exact.extend(paths.into_iter().map(normalize_rule));
        self
    }

    /// Add module-relative paths to the subtree-hide set.
    pub fn with_hide_subtree<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hide_subtree
            .extend(paths.into_iter().map(normalize_rule));
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// Hide rules are module-relative directory paths; tolerate `./` prefixes
/// and trailing slashes from the command line.
fn normalize_rule<S: Into<String>>(path: S) -> String {
    let raw = path.into();
    let trimmed = raw.strip_prefix("./").unwrap_or(&raw).trim_end_matches('/');
    if trimmed.is_empty() {
        ".".to_string()
    } else {
        trimmed.to_string()
    }
}
