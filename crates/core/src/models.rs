use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// A package directory discovered by the scanner: its import path and the
/// in-module paths it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedPackage {
    /// Canonical import path.
    pub path: String,
    /// Direct imports, restricted to paths inside the same module.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub imports: BTreeSet<String>,
}

/// Style and identity of one visible package in the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Import path; unique node id.
    pub id: String,
    /// Multi-line display label.
    pub label: String,
    /// Whether the package is implementation-private.
    #[serde(default)]
    pub internal: bool,
    /// Font color (hex or named).
    pub font_color: String,
    /// Box fill color.
    pub fill_color: String,
}

/// One surviving import relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    /// Dashed when the destination is internal.
    #[serde(default)]
    pub dashed: bool,
    /// Edge tint, taken from the source node's fill (neutral gray for
    /// internal sources).
    pub color: String,
}

/// Aggregate counts over the whole graph, visible and suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_packages: usize,
    pub visible_packages: usize,
    pub hidden_packages: usize,
    pub internal_packages: usize,
    pub total_edges: usize,
    pub visible_edges: usize,
}

/// Scan metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub scan_duration_ms: u64,
    pub packages_per_second: f64,
    pub timestamp: String,
    pub tool_version: String,
}

impl Default for ScanMetadata {
    fn default() -> Self {
        Self {
            scan_duration_ms: 0,
            packages_per_second: 0.0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ScanMetadata {
    /// Metadata for a finished scan.
    pub fn for_run(duration: Duration, package_count: usize) -> Self {
        Self {
            scan_duration_ms: duration.as_millis() as u64,
            packages_per_second: if duration.as_secs_f64() > 0.0 {
                package_count as f64 / duration.as_secs_f64()
            } else {
                package_count as f64
            },
            ..Default::default()
        }
    }
}

/// The assembled diagram: everything a renderer needs, nothing it has to
/// compute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    /// Module root import path.
    pub module: String,
    /// Filesystem root that was scanned.
    pub root: PathBuf,
    /// Visible packages in sorted path order.
    pub nodes: Vec<NodeRecord>,
    /// Surviving import edges, grouped by source in sorted order.
    pub edges: Vec<EdgeRecord>,
    pub stats: GraphStats,
    pub metadata: ScanMetadata,
}
