//! Weighted edges over vertex handles.

use ostov_common::VertexId;
use serde::{Deserialize, Serialize};

/// A weighted connection between two vertices.
///
/// The `tail`/`head` order encodes direction for directed interpretations;
/// undirected algorithms treat the pair symmetrically. Endpoints are handles
/// into the owning graph's vertex arena, so an edge never outlives its graph
/// in any meaningful way and carries no ownership of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    tail: VertexId,
    head: VertexId,
    weight: f64,
}

impl Edge {
    /// Creates a new edge. A missing weight defaults to 0.
    #[must_use]
    pub fn new(tail: VertexId, head: VertexId, weight: f64) -> Self {
        Self { tail, head, weight }
    }

    /// The origin endpoint (directed reading).
    #[must_use]
    pub const fn tail(&self) -> VertexId {
        self.tail
    }

    /// The destination endpoint (directed reading).
    #[must_use]
    pub const fn head(&self) -> VertexId {
        self.head
    }

    /// The edge weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns true iff both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Returns an edge with the endpoints swapped, weight unchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.head, self.tail, self.weight)
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is
    /// not an endpoint of this edge.
    ///
    /// With `directed` set, only the tail has an opposite; the undirected
    /// reading resolves either endpoint.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId, directed: bool) -> Option<VertexId> {
        if vertex == self.tail {
            Some(self.head)
        } else if vertex == self.head && !directed {
            Some(self.tail)
        } else {
            None
        }
    }
}

/// Two edges are equal iff their unordered endpoint pairs and weights match.
///
/// Parallel edges are therefore detectable by scanning for equal edges.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        let same_pair = (self.tail == other.tail && self.head == other.head)
            || (self.tail == other.head && self.head == other.tail);
        same_pair && self.weight == other.weight
    }
}
