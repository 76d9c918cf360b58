//! Diagram assembly.
//!
//! Drives the pipeline: resolves the module, obtains the scanned package
//! list, replays it into the import graph, then walks the graph in sorted
//! path order deciding per node whether it survives the visibility rules
//! and which style it carries. The output is a complete [`Diagram`];
//! renderers add nothing but syntax.

use crate::categorizer::{is_internal, PathCategorizer};
use crate::config::ScanConfig;
use crate::graph::ImportGraph;
use crate::models::{Diagram, EdgeRecord, GraphStats, NodeRecord, ScanMetadata, ScannedPackage};
use crate::palette::ColorCycler;
use crate::resolver::{resolve_module, ModuleInfo, ResolveError};
use crate::scanner::{PackageScanner, ScanError};
use crate::visibility::Visibility;
use std::collections::BTreeMap;
use std::time::Instant;
use thiserror::Error;

/// Style constants for internal (dimmed) nodes and for edges leaving them.
const INTERNAL_FONT: &str = "#888888";
const INTERNAL_FILL: &str = "#f3f3f3";
const NEUTRAL_EDGE: &str = "#dddddd";

#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("resolve error: {0}")]
    ResolveError(#[from] ResolveError),

    #[error("scan error: {0}")]
    ScanError(#[from] ScanError),
}

/// Scan `config.root` and assemble its import diagram.
pub fn generate_diagram(config: &ScanConfig) -> Result<Diagram, DiagramError> {
    let start = Instant::now();

    let module = resolve_module(&config.root)?;
    let scanner = PackageScanner::new(config.clone());
    let packages = scanner.scan(&module)?;

    let metadata = ScanMetadata::for_run(start.elapsed(), packages.len());
    Ok(assemble(&packages, &module, config, metadata))
}

/// Replay scanned packages into a fresh import graph.
///
/// Import targets that were never scanned themselves still get placeholder
/// nodes, so the result does not depend on discovery order.
pub fn build_graph(packages: &[ScannedPackage]) -> ImportGraph {
    let mut graph = ImportGraph::new();
    for pkg in packages {
        graph.get_or_create(&pkg.path);
        for dep in &pkg.imports {
            graph.add_import(&pkg.path, dep);
        }
    }
    graph
}

/// Assemble the final diagram from scan results.
///
/// Pure computation over in-memory sets; cannot fail.
pub fn assemble(
    packages: &[ScannedPackage],
    module: &ModuleInfo,
    config: &ScanConfig,
    metadata: ScanMetadata,
) -> Diagram {
    let graph = build_graph(packages);
    let categorizer = PathCategorizer::new(&module.path);
    let visibility = Visibility::new(
        &module.path,
        config.show_internal,
        config.hide_exact.clone(),
        config.hide_subtree.clone(),
    );
    let mut cycler = ColorCycler::new();

    // Node pass, sorted path order. The fill of each surviving node is
    // remembered for the edge pass; presence in the map doubles as the
    // visibility verdict.
    let mut nodes = Vec::new();
    let mut fills: BTreeMap<&str, &str> = BTreeMap::new();

    for node in graph.iter() {
        if visibility.is_hidden(&graph, &node.path) {
            continue;
        }

        let internal = is_internal(&node.path);
        let (font, fill) = if internal {
            (INTERNAL_FONT, INTERNAL_FILL)
        } else {
            let pair = cycler.next();
            (pair.font, pair.fill)
        };
        fills.insert(node.path.as_str(), fill);

        nodes.push(NodeRecord {
            id: node.path.clone(),
            label: categorizer.label(&node.path),
            internal,
            font_color: font.to_string(),
            fill_color: fill.to_string(),
        });
    }

    // Edge pass: only edges with both endpoints surviving.
    let mut edges = Vec::new();
    for node in graph.iter() {
        let Some(&source_fill) = fills.get(node.path.as_str()) else {
            continue;
        };
        for dep in &node.imports {
            if !fills.contains_key(dep.as_str()) {
                continue;
            }
            let color = if is_internal(&node.path) {
                NEUTRAL_EDGE
            } else {
                source_fill
            };
            edges.push(EdgeRecord {
                from: node.path.clone(),
                to: dep.clone(),
                dashed: is_internal(dep),
                color: color.to_string(),
            });
        }
    }

    let stats = GraphStats {
        total_packages: graph.len(),
        visible_packages: nodes.len(),
        hidden_packages: graph.len() - nodes.len(),
        internal_packages: graph.iter().filter(|n| is_internal(&n.path)).count(),
        total_edges: graph.iter().map(|n| n.imports.len()).sum(),
        visible_edges: edges.len(),
    };

    Diagram {
        module: module.path.clone(),
        root: config.root.clone(),
        nodes,
        edges,
        stats,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    const MODULE: &str = "example.com/app";

    fn module_info() -> ModuleInfo {
        ModuleInfo {
            path: MODULE.to_string(),
            manifest: PathBuf::from("go.mod"),
        }
    }

    fn pkg(path: &str, imports: &[&str]) -> ScannedPackage {
        ScannedPackage {
            path: path.to_string(),
            imports: imports.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Root imports internal/db; cli imports root.
    fn sample_packages() -> Vec<ScannedPackage> {
        vec![
            pkg("example.com/app", &["example.com/app/internal/db"]),
            pkg("example.com/app/internal/db", &[]),
            pkg("example.com/app/cli", &["example.com/app"]),
        ]
    }

    fn node_ids(diagram: &Diagram) -> Vec<&str> {
        diagram.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_internal_suppressed_by_default() {
        let diagram = assemble(
            &sample_packages(),
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );

        assert_eq!(node_ids(&diagram), vec!["example.com/app", "example.com/app/cli"]);
        assert_eq!(diagram.edges.len(), 1);
        assert_eq!(diagram.edges[0].from, "example.com/app/cli");
        assert_eq!(diagram.edges[0].to, "example.com/app");
        assert!(!diagram.edges[0].dashed);
    }

    #[test]
    fn test_internal_shown_when_enabled() {
        let config = ScanConfig::default().with_show_internal(true);
        let diagram = assemble(
            &sample_packages(),
            &module_info(),
            &config,
            ScanMetadata::default(),
        );

        assert_eq!(
            node_ids(&diagram),
            vec![
                "example.com/app",
                "example.com/app/cli",
                "example.com/app/internal/db"
            ]
        );

        let into_db = diagram
            .edges
            .iter()
            .find(|e| e.to == "example.com/app/internal/db")
            .unwrap();
        assert_eq!(into_db.from, "example.com/app");
        assert!(into_db.dashed);
    }

    #[test]
    fn test_hide_subtree_covers_non_internal_children() {
        let mut packages = sample_packages();
        packages.push(pkg("example.com/app/cli/sub", &["example.com/app/cli"]));

        let config = ScanConfig::default().with_hide_subtree(vec!["cli"]);
        let diagram = assemble(&packages, &module_info(), &config, ScanMetadata::default());

        assert_eq!(node_ids(&diagram), vec!["example.com/app"]);
        assert!(diagram.edges.is_empty());
    }

    #[test]
    fn test_nodes_and_edges_in_sorted_order() {
        let packages = vec![
            pkg("example.com/app/zz", &["example.com/app"]),
            pkg("example.com/app", &[]),
            pkg("example.com/app/aa", &["example.com/app"]),
        ];

        let diagram = assemble(
            &packages,
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );

        assert_eq!(
            node_ids(&diagram),
            vec![
                "example.com/app",
                "example.com/app/aa",
                "example.com/app/zz"
            ]
        );
        let edge_sources: Vec<&str> = diagram.edges.iter().map(|e| e.from.as_str()).collect();
        assert_eq!(edge_sources, vec!["example.com/app/aa", "example.com/app/zz"]);
    }

    #[test]
    fn test_colors_cycle_deterministically() {
        let packages = vec![
            pkg("example.com/app", &[]),
            pkg("example.com/app/aa", &[]),
            pkg("example.com/app/bb", &[]),
        ];

        let first = assemble(
            &packages,
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );
        let second = assemble(
            &packages,
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );

        let fills = |d: &Diagram| {
            d.nodes
                .iter()
                .map(|n| n.fill_color.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(fills(&first), fills(&second));
        assert_ne!(first.nodes[0].fill_color, first.nodes[1].fill_color);
        assert_ne!(first.nodes[1].fill_color, first.nodes[2].fill_color);
    }

    #[test]
    fn test_internal_nodes_use_dimmed_style_not_palette() {
        let config = ScanConfig::default().with_show_internal(true);
        let diagram = assemble(
            &sample_packages(),
            &module_info(),
            &config,
            ScanMetadata::default(),
        );

        let db = diagram
            .nodes
            .iter()
            .find(|n| n.id == "example.com/app/internal/db")
            .unwrap();
        assert!(db.internal);
        assert_eq!(db.fill_color, INTERNAL_FILL);
        assert_eq!(db.font_color, INTERNAL_FONT);
    }

    #[test]
    fn test_edge_tint_follows_source_fill() {
        let config = ScanConfig::default().with_show_internal(true);
        let mut packages = sample_packages();
        // An internal package importing another internal one: the edge gets
        // the neutral tone instead of a palette fill.
        packages.push(pkg(
            "example.com/app/internal/cache",
            &["example.com/app/internal/db"],
        ));
        packages.push(pkg(
            "example.com/app/svc",
            &["example.com/app/internal/cache"],
        ));

        let diagram = assemble(&packages, &module_info(), &config, ScanMetadata::default());

        let cli_edge = diagram
            .edges
            .iter()
            .find(|e| e.from == "example.com/app/cli")
            .unwrap();
        let cli = diagram
            .nodes
            .iter()
            .find(|n| n.id == "example.com/app/cli")
            .unwrap();
        assert_eq!(cli_edge.color, cli.fill_color);

        let internal_edge = diagram
            .edges
            .iter()
            .find(|e| e.from == "example.com/app/internal/cache")
            .unwrap();
        assert_eq!(internal_edge.color, NEUTRAL_EDGE);
    }

    #[test]
    fn test_label_of_root_and_children() {
        let diagram = assemble(
            &sample_packages(),
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );

        let root = diagram.nodes.iter().find(|n| n.id == MODULE).unwrap();
        assert_eq!(root.label, "(app)");
        let cli = diagram
            .nodes
            .iter()
            .find(|n| n.id == "example.com/app/cli")
            .unwrap();
        assert_eq!(cli.label, "cli");
    }

    #[test]
    fn test_stats() {
        let diagram = assemble(
            &sample_packages(),
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );

        assert_eq!(diagram.stats.total_packages, 3);
        assert_eq!(diagram.stats.visible_packages, 2);
        assert_eq!(diagram.stats.hidden_packages, 1);
        assert_eq!(diagram.stats.internal_packages, 1);
        assert_eq!(diagram.stats.total_edges, 2);
        assert_eq!(diagram.stats.visible_edges, 1);
    }

    #[test]
    fn test_build_graph_creates_placeholders() {
        let packages = vec![pkg("example.com/app", &["example.com/app/internal/db"])];
        let graph = build_graph(&packages);

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("example.com/app/internal/db"));
    }

    #[test]
    fn test_imports_outside_any_scanned_package_still_render() {
        // A placeholder target that is not internal must surface like any
        // other package.
        let packages = vec![pkg("example.com/app", &["example.com/app/gen"])];
        let diagram = assemble(
            &packages,
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );

        assert_eq!(
            node_ids(&diagram),
            vec!["example.com/app", "example.com/app/gen"]
        );
        assert_eq!(diagram.edges.len(), 1);
    }

    #[test]
    fn test_assemble_ignores_duplicate_edges() {
        let mut imports = BTreeSet::new();
        imports.insert("example.com/app".to_string());
        let packages = vec![
            pkg("example.com/app", &[]),
            ScannedPackage {
                path: "example.com/app/cli".to_string(),
                imports,
            },
        ];

        let diagram = assemble(
            &packages,
            &module_info(),
            &ScanConfig::default(),
            ScanMetadata::default(),
        );
        assert_eq!(diagram.edges.len(), 1);
    }
}
