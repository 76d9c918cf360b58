use super::FormatError;
use crate::models::Diagram;

/// Serialize a diagram to pretty-printed JSON.
pub fn to_json(diagram: &Diagram) -> Result<String, FormatError> {
    serde_json::to_string_pretty(diagram).map_err(FormatError::from)
}
