//! Path-keyed import graph.
//!
//! Nodes reference each other by import path only; the graph map owns every
//! node outright. A `BTreeMap` keeps iteration in lexicographic path order,
//! which the rest of the pipeline relies on for reproducible output.

use std::collections::{BTreeMap, BTreeSet};

/// One package in the module, with its direct neighbors in both directions.
///
/// `imports` and `imported_by` are inverse views of the same edge set and
/// are kept consistent by [`ImportGraph::add_import`].
#[derive(Debug, Clone, Default)]
pub struct PackageNode {
    /// Canonical import path.
    pub path: String,
    /// Paths this package imports directly.
    pub imports: BTreeSet<String>,
    /// Paths that import this package directly.
    pub imported_by: BTreeSet<String>,
}

/// Directed import graph keyed by import path.
///
/// Write-once per run: edges are only ever added, never removed.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    nodes: BTreeMap<String, PackageNode>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `path`, creating an empty one if needed.
    ///
    /// Referenced-but-not-yet-scanned paths become placeholder nodes, so
    /// edge insertion never depends on discovery order.
    pub fn get_or_create(&mut self, path: &str) -> &mut PackageNode {
        self.nodes
            .entry(path.to_string())
            .or_insert_with(|| PackageNode {
                path: path.to_string(),
                ..Default::default()
            })
    }

    /// Record a direct import from `from` to `to`.
    ///
    /// Both nodes are created on demand and both directions of the edge are
    /// updated. Adding the same edge twice is a no-op.
    pub fn add_import(&mut self, from: &str, to: &str) {
        self.get_or_create(to).imported_by.insert(from.to_string());
        self.get_or_create(from).imports.insert(to.to_string());
    }

    pub fn get(&self, path: &str) -> Option<&PackageNode> {
        self.nodes.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    /// Iterate nodes in sorted path order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
