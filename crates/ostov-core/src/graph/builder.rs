//! Construction-time edge loading.

use ostov_common::{Error, FxHashSet, Label, OrdinalLabel, Result};
use tracing::debug;

use super::Graph;

/// Builds a [`Graph`] from a declared vertex count and a sequence of edge
/// records.
///
/// The builder is the enforcement point for the count invariant: with plain
/// labels, the distinct labels discovered while linking must equal the
/// declared vertex count. With [`ordered`](Self::ordered) labels, missing
/// vertices in `1..=vertex_count` are synthesized instead.
///
/// ```
/// use ostov_core::GraphBuilder;
///
/// let graph = GraphBuilder::<u32>::new(3)
///     .weighted_edge(1, 2, 1.0)
///     .weighted_edge(2, 3, 2.0)
///     .build()?;
/// assert_eq!(graph.vertex_count(), 3);
/// # Ok::<(), ostov_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertex_count: usize,
    synthesize: Option<fn(u64) -> V>,
    records: Vec<(V, V, f64)>,
}

impl<V: Label> GraphBuilder<V> {
    /// Starts a builder for a graph with `vertex_count` declared vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            synthesize: None,
            records: Vec::new(),
        }
    }

    /// Declares the labels as the dense range `1..=vertex_count`.
    ///
    /// Vertices not referenced by any edge are synthesized from their
    /// ordinal position rather than raising a count mismatch; edge labels
    /// outside the range still fail the count check at build time.
    #[must_use]
    pub fn ordered(mut self) -> Self
    where
        V: OrdinalLabel,
    {
        self.synthesize = Some(V::from_ordinal);
        self
    }

    /// Adds an unweighted edge (weight 0).
    #[must_use]
    pub fn edge(self, tail: V, head: V) -> Self {
        self.weighted_edge(tail, head, 0.0)
    }

    /// Adds a weighted edge.
    #[must_use]
    pub fn weighted_edge(mut self, tail: V, head: V, weight: f64) -> Self {
        self.records.push((tail, head, weight));
        self
    }

    /// Adds an edge from loader-supplied label tokens. A missing weight
    /// defaults to 0.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLabel`] if a token does not parse into the label type.
    pub fn record(self, tail: &str, head: &str, weight: Option<f64>) -> Result<Self> {
        let tail = tail
            .parse::<V>()
            .map_err(|_| Error::InvalidLabel(tail.to_string()))?;
        let head = head
            .parse::<V>()
            .map_err(|_| Error::InvalidLabel(head.to_string()))?;
        Ok(self.weighted_edge(tail, head, weight.unwrap_or(0.0)))
    }

    /// Adds edges from pre-split record lines of the shape
    /// `tail head [weight]`.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedRecord`] on wrong arity or a non-numeric weight
    /// token, [`Error::InvalidLabel`] on an unparsable label.
    pub fn records<'a, I>(mut self, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (tail, head, weight) = match fields.as_slice() {
                [tail, head] => (*tail, *head, None),
                [tail, head, weight] => {
                    let weight = weight
                        .parse::<f64>()
                        .map_err(|_| Error::MalformedRecord(line.to_string()))?;
                    (*tail, *head, Some(weight))
                }
                _ => return Err(Error::MalformedRecord(line.to_string())),
            };
            self = self.record(tail, head, weight)?;
        }
        Ok(self)
    }

    /// Interns labels, validates the count invariant, links edges, and
    /// returns the finished graph with its arena sorted by label.
    ///
    /// # Errors
    ///
    /// [`Error::VertexCountMismatch`] when the distinct labels discovered
    /// from edges differ from the declared count (unordered mode), or when
    /// an edge label falls outside `1..=vertex_count` (ordered mode).
    pub fn build(self) -> Result<Graph<V>> {
        let mut seen = FxHashSet::default();
        let mut labels: Vec<V> = Vec::new();
        for (tail, head, _) in &self.records {
            if seen.insert(tail.clone()) {
                labels.push(tail.clone());
            }
            if seen.insert(head.clone()) {
                labels.push(head.clone());
            }
        }

        let ordered = self.synthesize.is_some();
        if let Some(from_ordinal) = self.synthesize {
            for n in 1..=self.vertex_count as u64 {
                let label = from_ordinal(n);
                if seen.insert(label.clone()) {
                    labels.push(label);
                }
            }
        }
        // in ordered mode the synthesis pass fills every gap in 1..=n, so a
        // surplus can only come from an edge label outside the dense range
        if labels.len() != self.vertex_count {
            return Err(Error::VertexCountMismatch {
                declared: self.vertex_count,
                discovered: labels.len(),
            });
        }

        labels.sort();
        debug!(
            vertices = labels.len(),
            edges = self.records.len(),
            ordered,
            "graph built"
        );
        Ok(Graph::from_parts(labels, self.records, ordered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_is_fatal() {
        let err = GraphBuilder::<u32>::new(2)
            .edge(1, 2)
            .edge(2, 3)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::VertexCountMismatch {
                declared: 2,
                discovered: 3
            }
        );
    }

    #[test]
    fn ordered_mode_synthesizes_missing_vertices() {
        let g = GraphBuilder::<u32>::new(5).ordered().edge(1, 2).build().unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert!(g.vertex(&5).is_some());
        assert_eq!(g.isolated_vertices().len(), 3);
    }

    #[test]
    fn ordered_mode_rejects_out_of_range_labels() {
        let err = GraphBuilder::<u32>::new(5)
            .ordered()
            .edge(1, 7)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::VertexCountMismatch {
                declared: 5,
                discovered: 6
            }
        );
    }

    #[test]
    fn records_parse_labels_and_weights() {
        let g = GraphBuilder::<u32>::new(3)
            .records(["1 2 1.5", "2 3"])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges()[0].weight(), 1.5);
        assert_eq!(g.edges()[1].weight(), 0.0);
    }

    #[test]
    fn malformed_records_are_fatal() {
        let err = GraphBuilder::<u32>::new(2)
            .records(["1 2 3 4"])
            .unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));

        let err = GraphBuilder::<u32>::new(2).records(["1 2 heavy"]).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));

        let err = GraphBuilder::<u32>::new(2).record("one", "2", None).unwrap_err();
        assert_eq!(err, Error::InvalidLabel("one".to_string()));
    }

    #[test]
    fn string_labels_build_unordered() {
        let g = GraphBuilder::<String>::new(2)
            .record("left", "right", Some(1.0))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert!(g.vertex(&"left".to_string()).is_some());
    }
}
