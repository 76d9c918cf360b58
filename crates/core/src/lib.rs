//! Modgraph Core Library
//!
//! This library inspects a Go module's internal package structure and
//! assembles a directed import graph, annotated for readability: cycling
//! colors for externally-visible packages, dimmed styling for `internal`
//! packages, dashed edges into internal packages, and hierarchical
//! multi-line labels.
//!
//! # Features
//!
//! - Resolve the module's canonical path from `go.mod`
//! - Walk the source tree and extract per-package in-module imports
//! - Suppress internal packages unless a visible package imports them
//! - Hide packages by exact relative path or whole subtree
//! - Deterministic, diffable output ordering and coloring
//! - Render the diagram as Graphviz DOT, JSON, YAML or a text summary
//!
//! # Example
//!
//! ```no_run
//! use modgraph_core::{format_output, generate_diagram, OutputFormat, ScanConfig};
//! use std::path::PathBuf;
//!
//! let config = ScanConfig::new(PathBuf::from("."));
//! let diagram = generate_diagram(&config).unwrap();
//! let dot = format_output(&diagram, OutputFormat::Dot).unwrap();
//! println!("{}", dot);
//! ```

pub mod assembler;
pub mod categorizer;
pub mod config;
pub mod graph;
pub mod models;
pub mod output;
pub mod palette;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod visibility;

// Re-exports for convenience
pub use assembler::{assemble, build_graph, generate_diagram, DiagramError};
pub use config::ScanConfig;
pub use graph::{ImportGraph, PackageNode};
pub use models::*;
pub use output::{format_output, format_summary, FormatError, OutputFormat};
pub use palette::{ColorCycler, ColorPair, PALETTE};
pub use resolver::{resolve_module, ModuleInfo, ResolveError};
pub use scanner::{PackageScanner, ScanError};
pub use visibility::Visibility;
