use super::document::{Connection, ExportedStructure, FlowExport};
use crate::error::{GraphConversionError, InterchangeError};
use crate::flow::{
    DEFAULT_CATEGORY, EdgeStyle, FlowEdge, FlowGraph, FlowNode, IntoGraph, NodeContent, Position,
    UNNAMED_NODE_LABEL,
};
use ahash::AHashSet;
use itertools::Itertools;

impl IntoGraph for FlowExport {
    fn into_graph(self) -> Result<FlowGraph, GraphConversionError> {
        from_interchange(&self).map_err(GraphConversionError::from)
    }
}

const LAYOUT_ORIGIN_X: f64 = 100.0;
const LAYOUT_ORIGIN_Y: f64 = 100.0;
const LAYOUT_X_STEP: f64 = 200.0;
const LAYOUT_Y_STEP: f64 = 150.0;
const LAYOUT_COLUMNS: usize = 3;

/// Converts a graph into the flattened interchange document.
///
/// One structure per node, its outgoing connections derived by scanning the
/// edge list. Edges whose target id does not resolve to a node are dropped
/// from the connection lists; the input graph is never mutated.
pub fn to_interchange(graph: &FlowGraph) -> FlowExport {
    let known: AHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

    let mut skipped = 0;
    let outgoing = graph
        .edges
        .iter()
        .filter(|edge| {
            let valid = known.contains(edge.source.as_str()) && known.contains(edge.target.as_str());
            if !valid {
                skipped += 1;
            }
            valid
        })
        .map(|edge| (edge.source.as_str(), edge.target.as_str()))
        .into_group_map();
    if skipped > 0 {
        log::warn!("Export dropped {} dangling edge(s)", skipped);
    }

    let structures = graph
        .nodes
        .iter()
        .map(|node| ExportedStructure {
            id: node.id.clone(),
            name: display_label(node),
            code: node.display_code(),
            category: display_category(node),
            is_active: node.data.is_active,
            description: node.data.description.clone(),
            content: node.data.content.clone(),
            level: Some(node.data.level),
            connections: outgoing
                .get(node.id.as_str())
                .map(|targets| targets.iter().map(|t| Connection::new(*t)).collect())
                .unwrap_or_default(),
            children: Vec::new(),
            parent_id: None,
        })
        .collect();

    FlowExport { structures }
}

/// Reconstructs a graph from an interchange document.
///
/// Every structure becomes a node with its display fields preserved and its
/// level reset to 0; a subsequent resolver pass recomputes levels from the
/// rebuilt topology. Layout positions are assigned on a fixed-column grid
/// derived from the structure index, and every recorded (parent, child) pair
/// becomes one freshly identified edge with the standard arrow styling.
/// Connections to unknown ids are skipped.
pub fn from_interchange(document: &FlowExport) -> Result<FlowGraph, InterchangeError> {
    document.validate()?;

    let known: AHashSet<&str> = document
        .structures
        .iter()
        .map(|s| s.id.as_str())
        .collect();

    let mut nodes = Vec::with_capacity(document.structures.len());
    let mut edges = Vec::new();
    let mut skipped = 0;
    let mut edge_seq = 0usize;

    let mut push_edge = |edges: &mut Vec<FlowEdge>, source: &str, target: &str| {
        edge_seq += 1;
        edges.push(FlowEdge {
            id: format!("edge-{}-{}-{}", edge_seq, source, target),
            source: source.to_string(),
            target: target.to_string(),
            style: EdgeStyle::default(),
        });
    };

    for (index, structure) in document.structures.iter().enumerate() {
        nodes.push(FlowNode {
            id: structure.id.clone(),
            position: grid_position(index),
            data: NodeContent {
                label: structure.name.clone(),
                level: 0,
                category: if structure.category.is_empty() {
                    DEFAULT_CATEGORY.to_string()
                } else {
                    structure.category.clone()
                },
                code: structure.code.clone(),
                is_active: structure.is_active,
                description: structure.description.clone(),
                content: structure.content.clone(),
            },
        });

        for (source, target) in structural_pairs(structure) {
            if !known.contains(source) || !known.contains(target) {
                log::warn!(
                    "Import skipped connection {} -> {}: unknown node id",
                    source,
                    target
                );
                skipped += 1;
                continue;
            }
            push_edge(&mut edges, source, target);
        }
    }

    if skipped > 0 {
        log::warn!("Import dropped {} unresolved connection(s)", skipped);
    }

    Ok(FlowGraph { nodes, edges })
}

/// The (parent, child) pairs a structure records, whichever shape it uses.
/// The canonical connections list wins over the legacy shapes; a `children`
/// list is consulted next, and the lossy single-parent pointer last.
fn structural_pairs(structure: &ExportedStructure) -> Vec<(&str, &str)> {
    if !structure.connections.is_empty() {
        return structure
            .connections
            .iter()
            .map(|c| (structure.id.as_str(), c.target_id.as_str()))
            .collect();
    }
    if !structure.children.is_empty() {
        return structure
            .children
            .iter()
            .map(|child| (structure.id.as_str(), child.as_str()))
            .collect();
    }
    if let Some(parent) = &structure.parent_id {
        return vec![(parent.as_str(), structure.id.as_str())];
    }
    Vec::new()
}

fn grid_position(index: usize) -> Position {
    let column = index % LAYOUT_COLUMNS;
    let row = index / LAYOUT_COLUMNS;
    Position::new(
        LAYOUT_ORIGIN_X + column as f64 * LAYOUT_X_STEP,
        LAYOUT_ORIGIN_Y + row as f64 * LAYOUT_Y_STEP,
    )
}

fn display_label(node: &FlowNode) -> String {
    if node.data.label.is_empty() {
        UNNAMED_NODE_LABEL.to_string()
    } else {
        node.data.label.clone()
    }
}

fn display_category(node: &FlowNode) -> String {
    if node.data.category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        node.data.category.clone()
    }
}
