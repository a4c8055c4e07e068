use serde::{Deserialize, Serialize};

/// Fallback label applied on export when a node carries an empty label.
pub const UNNAMED_NODE_LABEL: &str = "Unnamed Node";

/// Fallback category tag for nodes that do not declare one.
pub const DEFAULT_CATEGORY: &str = "default";

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display payload of a node, matching the editor's save format.
///
/// `level` is a derived, cached view: it is recomputed from edge topology by
/// the resolver and any externally supplied value is overwritten on the next
/// recalculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeContent {
    pub label: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default = "default_category", alias = "type")]
    pub category: String,
    #[serde(default)]
    pub code: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_is_active() -> bool {
    true
}

impl NodeContent {
    /// Creates content for a freshly dropped node: level 0 until the next
    /// resolver pass, default category, active.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: 0,
            category: default_category(),
            code: String::new(),
            is_active: true,
            description: None,
            content: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

/// A single entity node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(default)]
    pub position: Position,
    pub data: NodeContent,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            data: NodeContent::new(label),
        }
    }

    /// Short display token for this node: the explicit code if set, otherwise
    /// an uppercased prefix of the id.
    pub fn display_code(&self) -> String {
        if self.data.code.is_empty() {
            self.id.chars().take(4).collect::<String>().to_uppercase()
        } else {
            self.data.code.clone()
        }
    }
}
