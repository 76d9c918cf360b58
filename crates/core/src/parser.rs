//! Go source import extraction.
//!
//! Pulls the imported paths out of a `.go` file with line-oriented regular
//! expressions: the single-line `import "p"` form (optionally aliased) and
//! the factored `import ( ... )` block. The scan stays conservative and
//! prefers false positives over dropped dependencies; the caller filters
//! the result down to in-module paths anyway.

use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to compile import pattern: {0}")]
    InitError(#[from] regex::Error),
}

/// Regex-based extractor for Go import clauses.
pub struct ImportParser {
    single: Regex,
    block: Regex,
    spec: Regex,
}

impl ImportParser {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            // import "p"  /  import alias "p"  /  import _ "p"  /  import . "p"
            single: Regex::new(r#"(?m)^\s*import\s+(?:[A-Za-z_.][A-Za-z0-9_.]*\s+)?"([^"]+)""#)?,
            // import ( ... ), non-greedy up to the closing parenthesis
            block: Regex::new(r"(?ms)^\s*import\s*\((.*?)\)")?,
            // one quoted spec line inside a block, optionally aliased
            spec: Regex::new(r#"(?m)^\s*(?:[A-Za-z_.][A-Za-z0-9_.]*\s+)?"([^"]+)""#)?,
        })
    }

    /// Collect every imported path in `source`.
    pub fn extract(&self, source: &str) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();

        for cap in self.single.captures_iter(source) {
            if let Some(m) = cap.get(1) {
                imports.insert(m.as_str().to_string());
            }
        }

        for block in self.block.captures_iter(source) {
            if let Some(body) = block.get(1) {
                for cap in self.spec.captures_iter(body.as_str()) {
                    if let Some(m) = cap.get(1) {
                        imports.insert(m.as_str().to_string());
                    }
                }
            }
        }

        imports
    }
}
