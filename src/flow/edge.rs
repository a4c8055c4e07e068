use serde::{Deserialize, Serialize};

/// Stroke color of a freshly created connection.
pub const EDGE_STROKE: &str = "#0FA0CE";

/// Stroke width of a freshly created connection.
pub const EDGE_STROKE_WIDTH: f32 = 2.0;

/// Arrow marker drawn at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerKind {
    #[default]
    #[serde(rename = "arrowclosed")]
    ArrowClosed,
    #[serde(rename = "arrow")]
    Arrow,
    #[serde(rename = "none")]
    None,
}

/// Presentation metadata carried by an edge. Not structural: the codec
/// regenerates it on import and the resolver ignores it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub animated: bool,
    pub stroke: String,
    pub stroke_width: f32,
    pub marker: MarkerKind,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            animated: true,
            stroke: EDGE_STROKE.to_string(),
            stroke_width: EDGE_STROKE_WIDTH,
            marker: MarkerKind::ArrowClosed,
        }
    }
}

/// A directed connection between two nodes. `source` is the structural
/// parent and `target` the child. Duplicate (source, target) pairs are
/// allowed, and an edge may reference a node id that no longer exists; such
/// dangling edges are skipped by the resolver and the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl FlowEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            style: EdgeStyle::default(),
        }
    }
}
