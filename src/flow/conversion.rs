use super::graph::FlowGraph;
use crate::error::GraphConversionError;

/// A trait for custom editor formats that can be converted into a Kaisou
/// [`FlowGraph`].
///
/// This is the primary extension point for making Kaisou format-agnostic. By
/// implementing this trait on your own document structs, you provide a
/// translation layer that lets the resolver and the codec operate on your
/// custom flow format.
///
/// # Example
///
/// ```rust
/// use kaisou::prelude::*;
/// use kaisou::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyEditorNode { id: String, title: String }
/// struct MyEditorDocument { nodes: Vec<MyEditorNode> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyEditorDocument {
///     fn into_graph(self) -> Result<FlowGraph, GraphConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| FlowNode::new(n.id, n.title, Position::default()))
///             .collect();
///
///         Ok(FlowGraph::new(nodes, vec![])) // Convert your edges here as well
///     }
/// }
///
/// let document = MyEditorDocument {
///     nodes: vec![MyEditorNode { id: "a".to_string(), title: "Root".to_string() }],
/// };
/// let graph = document.into_graph().unwrap();
/// assert_eq!(graph.nodes.len(), 1);
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a Kaisou-compatible graph.
    fn into_graph(self) -> Result<FlowGraph, GraphConversionError>;
}
