use crate::error::InterchangeError;
use serde::{Deserialize, Serialize};

/// A single outgoing connection recorded by a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub target_id: String,
}

impl Connection {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }
}

/// One flattened entity of the interchange document, corresponding 1:1 to a
/// node. The canonical structural shape is the outgoing `connections` list,
/// which preserves multi-parent topologies losslessly. Two legacy shapes are
/// still accepted on import: a `children` id list and a single `parentId`
/// pointer (also readable under its historical `parentTempId` name).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedStructure {
    #[serde(default, alias = "tempId")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "type")]
    pub category: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, alias = "levelRank", skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing)]
    pub children: Vec<String>,
    #[serde(default, alias = "parentTempId", skip_serializing)]
    pub parent_id: Option<String>,
}

fn default_is_active() -> bool {
    true
}

/// The flattened, order-independent interchange document: one structure per
/// node, each carrying its own outgoing-connection list. This is the only
/// bit-relevant wire format; the persistence and dialog collaborators store
/// and display its JSON text verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowExport {
    pub structures: Vec<ExportedStructure>,
}

impl FlowExport {
    /// Parses and validates an interchange document from JSON text.
    ///
    /// Rejects text that is not valid JSON, documents without a `structures`
    /// list, and structures missing an `id` or `name`. Nothing is partially
    /// applied on failure; the caller's graph state is untouched.
    pub fn from_json(text: &str) -> Result<Self, InterchangeError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| InterchangeError::JsonParseError(e.to_string()))?;

        match value.get("structures") {
            None => {
                return Err(InterchangeError::ValidationError(
                    "missing `structures` array".to_string(),
                ));
            }
            Some(structures) if !structures.is_array() => {
                return Err(InterchangeError::ValidationError(
                    "`structures` must be a list".to_string(),
                ));
            }
            Some(_) => {}
        }

        let document: FlowExport = serde_json::from_value(value)
            .map_err(|e| InterchangeError::JsonParseError(e.to_string()))?;
        document.validate()?;
        Ok(document)
    }

    /// Checks that every structure carries the mandatory identity fields.
    pub fn validate(&self) -> Result<(), InterchangeError> {
        for (index, structure) in self.structures.iter().enumerate() {
            if structure.id.is_empty() {
                return Err(InterchangeError::ValidationError(format!(
                    "structure at index {} has no `id`",
                    index
                )));
            }
            if structure.name.is_empty() {
                return Err(InterchangeError::ValidationError(format!(
                    "structure '{}' has no `name`",
                    structure.id
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, InterchangeError> {
        serde_json::to_string(self).map_err(|e| InterchangeError::JsonParseError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, InterchangeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InterchangeError::JsonParseError(e.to_string()))
    }
}
