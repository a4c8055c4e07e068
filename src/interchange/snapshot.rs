use crate::error::SnapshotError;
use crate::flow::FlowGraph;
use crate::resolver;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A resolved flow frozen to disk: the graph together with its settled level
/// map, stored in the bincode format. This is the opaque binary counterpart
/// of the JSON interchange document, meant for fast save/restore rather than
/// for editing.
#[derive(Serialize, Deserialize, Debug)]
pub struct FlowSnapshot {
    pub graph: FlowGraph,
    pub levels: AHashMap<String, u32>,
}

impl FlowSnapshot {
    pub fn new(graph: FlowGraph, levels: AHashMap<String, u32>) -> Self {
        Self { graph, levels }
    }

    /// Resolves the graph's levels, writes them back into node data, and
    /// captures both in a snapshot.
    pub fn capture(mut graph: FlowGraph) -> Self {
        let levels = resolver::compute_levels(&graph.nodes, &graph.edges);
        graph.apply_levels(&levels);
        Self { graph, levels }
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| SnapshotError::Serialization(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path)
            .map_err(|e| SnapshotError::Io(format!("Could not create file '{}': {}", path, e)))?;
        file.write_all(&bytes)
            .map_err(|e| SnapshotError::Io(format!("Could not write to file '{}': {}", path, e)))?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path)
            .map_err(|e| SnapshotError::Io(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| SnapshotError::Io(format!("Could not read from file '{}': {}", path, e)))?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Serialization(format!("Deserialization failed: {}", e)))
    }
}
