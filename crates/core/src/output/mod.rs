mod dot;
mod json;
mod yaml;

pub use dot::to_dot;
pub use json::to_json;
pub use yaml::to_yaml;

use crate::models::Diagram;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dot,
    Json,
    Yaml,
    Summary,
}

/// Format a diagram according to the specified format.
pub fn format_output(diagram: &Diagram, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Dot => Ok(to_dot(diagram)),
        OutputFormat::Json => to_json(diagram),
        OutputFormat::Yaml => to_yaml(diagram),
        OutputFormat::Summary => Ok(format_summary(diagram)),
    }
}

/// Generate a human-readable summary of the diagram.
pub fn format_summary(diagram: &Diagram) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Import Graph Summary\n\
         ====================\n\
         Module: {}\n\
         Root: {}\n\n",
        diagram.module,
        diagram.root.display()
    ));

    output.push_str(&format!(
        "Packages: {} total, {} visible, {} hidden ({} internal)\n\
         Edges: {} total, {} visible\n\n",
        diagram.stats.total_packages,
        diagram.stats.visible_packages,
        diagram.stats.hidden_packages,
        diagram.stats.internal_packages,
        diagram.stats.total_edges,
        diagram.stats.visible_edges,
    ));

    if !diagram.nodes.is_empty() {
        output.push_str("Visible Packages:\n");
        for node in &diagram.nodes {
            if node.internal {
                output.push_str(&format!("  {} (internal)\n", node.id));
            } else {
                output.push_str(&format!("  {}\n", node.id));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Scan Duration: {}ms ({:.2} packages/sec)\n\
         Timestamp: {}\n\
         Tool Version: {}\n",
        diagram.metadata.scan_duration_ms,
        diagram.metadata.packages_per_second,
        diagram.metadata.timestamp,
        diagram.metadata.tool_version
    ));

    output
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
