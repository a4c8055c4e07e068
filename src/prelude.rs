//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! kaisou crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kaisou::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a saved flow and resolve its hierarchy
//! let saved = std::fs::read_to_string("path/to/flow.json")?;
//! let mut graph = FlowGraph::from_json(&saved)?;
//!
//! let report = resolve_with_report(&graph.nodes, &graph.edges);
//! graph.apply_levels(&report.levels);
//!
//! // Export to the interchange document for the dialog collaborator
//! let document = to_interchange(&graph);
//! println!("{}", document.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::flow::{
    EdgeStyle, FlowEdge, FlowGraph, FlowNode, IntoGraph, MarkerKind, NodeContent, Position,
};

// Level resolution
pub use crate::resolver::{ResolutionReport, compute_levels, resolve_with_report};

// Interchange codec
pub use crate::interchange::{
    Connection, ExportedStructure, FlowExport, FlowSnapshot, from_interchange, to_interchange,
};

// Error types
pub use crate::error::{GraphConversionError, InterchangeError, SnapshotError};

// Hash map used across the public API
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
