use super::edge::FlowEdge;
use super::node::FlowNode;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Maximum number of hops when walking a node path up to its root. Guards
/// against cyclic parent chains.
const MAX_PATH_DEPTH: usize = 20;

/// A caller-owned snapshot of the canvas: all nodes and all directed edges.
///
/// The serde representation is the raw editor save format
/// (`{ "nodes": [...], "edges": [...] }`), so a stored flow can be loaded
/// back without any translation layer. The core never mutates a graph it was
/// handed; derived values (level maps, interchange documents, reconstructed
/// graphs) are returned as new values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Parses a graph from the raw editor save format.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serializes the graph to the raw editor save format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Writes a resolved level map back into node data. Nodes absent from the
    /// map fall back to level 0. This is the caller-side half of a resolver
    /// pass; the resolver itself never mutates the graph.
    pub fn apply_levels(&mut self, levels: &AHashMap<String, u32>) {
        for node in &mut self.nodes {
            node.data.level = levels.get(&node.id).copied().unwrap_or(0);
        }
    }

    /// Builds the root-to-node display path for a node, labels joined with
    /// `" / "`. Follows each node's most recently recorded parent and stops
    /// at [`MAX_PATH_DEPTH`] hops, so cyclic parent chains terminate.
    pub fn node_path(&self, node_id: &str) -> String {
        let mut child_to_parent: AHashMap<&str, &str> = AHashMap::new();
        for edge in &self.edges {
            child_to_parent.insert(edge.target.as_str(), edge.source.as_str());
        }

        let mut path: Vec<&str> = Vec::new();
        let mut current = Some(node_id);
        let mut depth = 0;

        while let Some(id) = current {
            if depth >= MAX_PATH_DEPTH {
                break;
            }
            let Some(node) = self.node(id) else { break };
            path.push(node.data.label.as_str());
            current = child_to_parent.get(id).copied();
            depth += 1;
        }

        path.reverse();
        path.join(" / ")
    }
}
