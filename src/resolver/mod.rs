//! Level resolution: derives an integer hierarchy level for every node from
//! edge topology alone.
//!
//! A node's level is one more than the maximum level of its direct parents;
//! roots (no incoming edge) and isolated nodes sit at level 0. Cycles are
//! broken deterministically without infinite recursion, and dangling edges
//! are skipped. Resolution is a pure function of `(nodes, edges)`: calling it
//! twice on an unchanged graph yields identical maps, and writing the result
//! back into node data is the caller's job (see
//! [`FlowGraph::apply_levels`](crate::flow::FlowGraph::apply_levels)).

mod engine;

use crate::flow::{FlowEdge, FlowNode};
use ahash::AHashMap;
use engine::LevelEngine;

/// Outcome of a resolution pass: the level map plus diagnostic counters for
/// the graph-shape anomalies that were absorbed along the way.
#[derive(Debug, Clone, Default)]
pub struct ResolutionReport {
    pub levels: AHashMap<String, u32>,
    /// Edges whose source or target id did not resolve to a node.
    pub dangling_edges: usize,
    /// Back-edges that re-entered the active call chain and were broken via
    /// the settled-parents fallback.
    pub cycles_broken: usize,
}

/// Computes the level of every node.
///
/// Terminates for any finite input, including cycles, self-loops, and
/// disconnected components. The specific level assigned to the first-visited
/// member of a cycle depends on iteration order over the node list; levels
/// are otherwise fully determined by topology.
pub fn compute_levels(nodes: &[FlowNode], edges: &[FlowEdge]) -> AHashMap<String, u32> {
    resolve_with_report(nodes, edges).levels
}

/// Like [`compute_levels`], but also reports how many dangling edges were
/// skipped and how many cycles were broken.
pub fn resolve_with_report(nodes: &[FlowNode], edges: &[FlowEdge]) -> ResolutionReport {
    let mut engine = LevelEngine::new(nodes, edges);
    engine.resolve_all(nodes);

    ResolutionReport {
        levels: engine.levels,
        dangling_edges: engine.dangling_edges,
        cycles_broken: engine.cycles_broken,
    }
}
