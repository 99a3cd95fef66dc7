//! Error types for graph construction and analysis.

use thiserror::Error;

/// Error type for all Ostov operations.
///
/// Fatal conditions are raised synchronously at the point of detection and
/// never retried internally. Soft outcomes (an MST on an edgeless graph, an
/// unreachable shortest-path destination) are expressed as empty or partial
/// results, not as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Declared vertex count does not match the vertices discovered while
    /// linking edges (only possible when labels are not auto-ordered).
    #[error("declared {declared} vertices but edges reference {discovered} distinct labels")]
    VertexCountMismatch {
        /// The vertex count the builder was declared with.
        declared: usize,
        /// The number of distinct labels discovered from edge records.
        discovered: usize,
    },

    /// A vertex label token could not be parsed into the label type.
    #[error("invalid vertex label: {0:?}")]
    InvalidLabel(String),

    /// An edge record had the wrong shape (arity, missing endpoint, or a
    /// non-numeric weight token).
    #[error("malformed edge record: {0}")]
    MalformedRecord(String),

    /// A topological sort was requested on a graph containing a directed
    /// cycle.
    #[error("graph contains a directed cycle")]
    CycleDetected,

    /// A condensation was requested but no strongly connected components
    /// were found (empty graph).
    #[error("cannot build a condensation without strongly connected components")]
    NoComponents,

    /// A vertex referenced by label is not present in the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
}

/// Result alias used across the Ostov crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::VertexCountMismatch {
            declared: 4,
            discovered: 5,
        };
        assert_eq!(
            err.to_string(),
            "declared 4 vertices but edges reference 5 distinct labels"
        );

        assert_eq!(
            Error::InvalidLabel("x7".to_string()).to_string(),
            "invalid vertex label: \"x7\""
        );
        assert_eq!(
            Error::CycleDetected.to_string(),
            "graph contains a directed cycle"
        );
    }
}
