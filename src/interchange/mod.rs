//! The graph codec: a pure bidirectional mapping between the in-memory
//! node/edge graph and a flattened, order-independent interchange document.
//!
//! Exporting then importing reproduces the same node id set, the same
//! per-node display fields, and the same directed (source, target) edge-pair
//! set; layout positions and synthetic edge ids are regenerated rather than
//! preserved bit-for-bit.

pub mod codec;
pub mod document;
pub mod snapshot;

pub use codec::*;
pub use document::*;
pub use snapshot::*;
