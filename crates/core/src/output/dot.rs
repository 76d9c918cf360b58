//! Graphviz DOT rendering.
//!
//! Serializes a [`Diagram`] to DOT. All policy (visibility, colors, labels)
//! is already baked into the records; this module only writes syntax.

use crate::models::Diagram;
use std::fmt::Write as FmtWrite;

/// Graph-level layout attributes.
const GRAPH_ATTRS: &[(&str, &str)] = &[
    ("rankdir", "BT"),
    ("concentrate", "false"),
    ("splines", "true"),
    ("overlap", "false"),
    ("nodesep", "0.15"),
    ("outputorder", "edgesfirst"),
];

/// Render the diagram as a Graphviz digraph.
pub fn to_dot(diagram: &Diagram) -> String {
    let mut out = String::with_capacity(4096);
    let _ = writeln!(out, "digraph {{");

    for (key, value) in GRAPH_ATTRS {
        let _ = writeln!(out, "  {}=\"{}\";", key, value);
    }
    let _ = writeln!(out);

    for node in &diagram.nodes {
        let _ = writeln!(
            out,
            "  {} [label={}, style=\"filled\", shape=\"box\", fontname=\"Helvetica\", \
             margin=\"0.15\", penwidth=\"2\", color=\"#ffffff\", fontcolor=\"{}\", fillcolor=\"{}\"];",
            quote(&node.id),
            quote(&node.label),
            node.font_color,
            node.fill_color,
        );
    }
    let _ = writeln!(out);

    for edge in &diagram.edges {
        let mut attrs = format!(
            "penwidth=\"2\", arrowsize=\"0.75\", color=\"{}\"",
            edge.color
        );
        if edge.dashed {
            attrs.push_str(", style=\"dashed\"");
        }
        let _ = writeln!(
            out,
            "  {} -> {} [{}];",
            quote(&edge.from),
            quote(&edge.to),
            attrs
        );
    }

    out.push_str("}\n");
    out
}

/// Quote a DOT identifier or label, escaping quotes, backslashes and
/// newlines.
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeRecord, GraphStats, NodeRecord, ScanMetadata};
    use std::path::PathBuf;

    fn diagram(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Diagram {
        Diagram {
            module: "example.com/app".to_string(),
            root: PathBuf::from("."),
            nodes,
            edges,
            stats: GraphStats::default(),
            metadata: ScanMetadata::default(),
        }
    }

    fn node(id: &str, label: &str, internal: bool) -> NodeRecord {
        NodeRecord {
            id: id.to_string(),
            label: label.to_string(),
            internal,
            font_color: "black".to_string(),
            fill_color: "#F0A3FF".to_string(),
        }
    }

    #[test]
    fn test_dot_structure() {
        let d = diagram(vec![node("example.com/app", "(app)", false)], vec![]);
        let dot = to_dot(&d);

        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("rankdir=\"BT\""));
        assert!(dot.contains("outputorder=\"edgesfirst\""));
        assert!(dot.contains("\"example.com/app\" [label=\"(app)\""));
        assert!(dot.contains("fillcolor=\"#F0A3FF\""));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_multiline_labels_are_escaped() {
        let d = diagram(
            vec![node("example.com/app/internal/db", "internal\ndb", true)],
            vec![],
        );
        let dot = to_dot(&d);

        assert!(dot.contains("label=\"internal\\ndb\""));
        assert!(!dot.contains("label=\"internal\ndb\""));
    }

    #[test]
    fn test_edge_attributes() {
        let d = diagram(
            vec![
                node("example.com/app", "(app)", false),
                node("example.com/app/internal/db", "internal\ndb", true),
            ],
            vec![EdgeRecord {
                from: "example.com/app".to_string(),
                to: "example.com/app/internal/db".to_string(),
                dashed: true,
                color: "#F0A3FF".to_string(),
            }],
        );
        let dot = to_dot(&d);

        assert!(dot.contains("\"example.com/app\" -> \"example.com/app/internal/db\""));
        assert!(dot.contains("arrowsize=\"0.75\""));
        assert!(dot.contains("style=\"dashed\""));
        assert!(dot.contains("color=\"#F0A3FF\""));
    }

    #[test]
    fn test_plain_edge_is_not_dashed() {
        let d = diagram(
            vec![
                node("example.com/app", "(app)", false),
                node("example.com/app/cli", "cli", false),
            ],
            vec![EdgeRecord {
                from: "example.com/app/cli".to_string(),
                to: "example.com/app".to_string(),
                dashed: false,
                color: "#0075DC".to_string(),
            }],
        );
        let dot = to_dot(&d);

        assert!(!dot.contains("dashed"));
    }

    #[test]
    fn test_quote_escapes_specials() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
    }
}
