use thiserror::Error;

/// Errors that can occur while parsing or validating an interchange document.
///
/// These are the only caller-visible import failures; graph-shape anomalies
/// (dangling references, cycles) are absorbed internally with deterministic
/// fallback behavior and never reach the caller as errors.
#[derive(Error, Debug, Clone)]
pub enum InterchangeError {
    #[error("Failed to parse interchange JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid interchange document: {0}")]
    ValidationError(String),
}

/// Errors that can occur when converting a custom editor format into a Kaisou
/// `FlowGraph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

impl From<InterchangeError> for GraphConversionError {
    fn from(err: InterchangeError) -> Self {
        GraphConversionError::ValidationError(err.to_string())
    }
}

/// Errors raised while saving or loading a binary flow snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot codec error: {0}")]
    Serialization(String),

    #[error("Snapshot I/O error: {0}")]
    Io(String),
}
