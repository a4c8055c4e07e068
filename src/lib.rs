//! # Kaisou - Hierarchy Resolution and Interchange Engine
//!
//! **Kaisou** computes hierarchy levels for node-and-connection flow graphs
//! and round-trips them through a flattened interchange format. It is the
//! headless core of a visual flow builder: the canvas, drag-and-drop, and
//! dialogs are external collaborators that hand the core plain node/edge data
//! and receive plain data back.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical in-memory model of a flow graph. The
//! primary workflow is:
//!
//! 1.  **Load Your Data**: Parse the editor's save format with [`flow::FlowGraph::from_json`],
//!     or implement the [`flow::IntoGraph`] trait to translate your own format.
//! 2.  **Resolve Levels**: Call [`resolver::compute_levels`] after every structural
//!     mutation. Each node's level is one more than the maximum level of its
//!     parents; roots sit at level 0, and cycles are broken deterministically.
//! 3.  **Apply**: Write the returned map back with [`flow::FlowGraph::apply_levels`]
//!     and refresh the display.
//! 4.  **Export / Import**: Use [`interchange::to_interchange`] and
//!     [`interchange::from_interchange`] to move the graph through the
//!     connection-list interchange document.
//!
//! ## Quick Start
//!
//! The following example demonstrates the end-to-end process.
//!
//! ```rust
//! use kaisou::prelude::*;
//!
//! // Build a small graph: root -> mid -> leaf.
//! let mut graph = FlowGraph::new(
//!     vec![
//!         FlowNode::new("root", "Organization", Position::new(100.0, 100.0)),
//!         FlowNode::new("mid", "Department", Position::new(300.0, 100.0)),
//!         FlowNode::new("leaf", "Team", Position::new(500.0, 100.0)),
//!     ],
//!     vec![
//!         FlowEdge::new("e1", "root", "mid"),
//!         FlowEdge::new("e2", "mid", "leaf"),
//!     ],
//! );
//!
//! // Resolve levels from topology and write them back.
//! let levels = compute_levels(&graph.nodes, &graph.edges);
//! graph.apply_levels(&levels);
//! assert_eq!(graph.node("leaf").unwrap().data.level, 2);
//!
//! // Round-trip through the interchange document.
//! let document = to_interchange(&graph);
//! let rebuilt = from_interchange(&document).unwrap();
//! assert_eq!(rebuilt.nodes.len(), 3);
//! assert_eq!(rebuilt.edges.len(), 2);
//! ```

pub mod error;
pub mod flow;
pub mod interchange;
pub mod prelude;
pub mod resolver;
