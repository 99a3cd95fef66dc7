//! Vertex handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle into a graph's vertex arena.
///
/// Vertex identity is handle identity: handles are produced by value-keyed
/// interning at build time, so two equal labels always resolve to the same
/// `VertexId` and comparing handles is equivalent to comparing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex handle from a raw arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}
