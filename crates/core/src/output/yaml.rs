use super::FormatError;
use crate::models::Diagram;

/// Serialize a diagram to YAML.
pub fn to_yaml(diagram: &Diagram) -> Result<String, FormatError> {
    serde_yaml::to_string(diagram).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphStats, ScanMetadata};
    use std::path::PathBuf;

    #[test]
    fn test_to_yaml() {
        let diagram = Diagram {
            module: "example.com/app".to_string(),
            root: PathBuf::from("/src/app"),
            nodes: vec![],
            edges: vec![],
            stats: GraphStats::default(),
            metadata: ScanMetadata::default(),
        };

        let yaml = to_yaml(&diagram).unwrap();
        assert!(yaml.contains("module:"));
        assert!(yaml.contains("nodes:"));
    }
}
