//! Package visibility rules.
//!
//! Decides which packages are suppressed from the diagram: explicit hide
//! rules first, then the internal-package policy. With internal display
//! enabled, an internal package stays visible only while at least one
//! visible package imports it; the check recurses through importers and
//! treats a package currently under evaluation as hidden, so import cycles
//! confined to internal packages settle to "hidden" instead of recursing
//! forever.

use crate::categorizer::{is_internal, PathCategorizer};
use crate::graph::ImportGraph;
use std::collections::BTreeSet;

/// Immutable rule set evaluated against a finished graph.
#[derive(Debug, Clone)]
pub struct Visibility {
    categorizer: PathCategorizer,
    show_internal: bool,
    hide_exact: BTreeSet<String>,
    hide_subtree: BTreeSet<String>,
}

impl Visibility {
    pub fn new(
        module: impl Into<String>,
        show_internal: bool,
        hide_exact: BTreeSet<String>,
        hide_subtree: BTreeSet<String>,
    ) -> Self {
        Self {
            categorizer: PathCategorizer::new(module),
            show_internal,
            hide_exact,
            hide_subtree,
        }
    }

    /// Whether the package at `path` is suppressed from the diagram.
    ///
    /// Pure with respect to the graph and rule set: repeated calls on an
    /// unchanged graph give identical answers.
    pub fn is_hidden(&self, graph: &ImportGraph, path: &str) -> bool {
        let mut visiting = Vec::new();
        self.hidden_with_stack(graph, path, &mut visiting)
    }

    fn hidden_with_stack(
        &self,
        graph: &ImportGraph,
        path: &str,
        visiting: &mut Vec<String>,
    ) -> bool {
        let rel = self.categorizer.relative(path);

        if self.hide_exact.contains(&rel) {
            return true;
        }

        // The subtree rules match the path itself and every ancestor
        // directory up to (but excluding) the module root.
        let mut cur = rel.as_str();
        while cur != "." {
            if self.hide_subtree.contains(cur) {
                return true;
            }
            cur = parent(cur);
        }

        if !self.show_internal {
            return is_internal(path);
        }

        if !is_internal(path) {
            return false;
        }

        // An internal package surfaces only if a visible package imports it.
        // A package already on the evaluation stack counts as hidden: inside
        // an importer cycle, only an importer outside the cycle can reveal
        // anything.
        if visiting.iter().any(|p| p == path) {
            return true;
        }

        let Some(node) = graph.get(path) else {
            return true;
        };

        visiting.push(path.to_string());
        let all_hidden = node
            .imported_by
            .iter()
            .all(|importer| self.hidden_with_stack(graph, importer, visiting));
        visiting.pop();

        all_hidden
    }
}

/// Parent directory of a module-relative path, `.` at the top.
fn parent(rel: &str) -> &str {
    match rel.rfind('/') {
        Some(idx) => &rel[..idx],
        None => ".",
    }
}
