//! Growing-forest accumulator for the spanning-tree constructors.

use indexmap::IndexSet;
use ostov_common::VertexId;

use crate::graph::Edge;

/// A mutable vertex-and-edge aggregate tracking one growing forest.
///
/// Created and discarded per algorithm invocation. Duplicate-safe: adding an
/// edge or vertex already present is a no-op, and [`merge`](Self::merge)
/// unions two accumulators without duplicating either set.
#[derive(Debug, Clone, Default)]
pub struct ConnectedComponent {
    vertices: IndexSet<VertexId>,
    edges: Vec<Edge>,
}

impl ConnectedComponent {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// The accepted edges, in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of accumulated vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `vertex` is in this component.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Whether an equal edge has already been accepted.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// The cycle-safety predicate shared by Kruskal and Boruvka.
    ///
    /// An edge is safe iff accepting it cannot close a cycle within this
    /// component, i.e. iff its endpoints are not both already inside.
    #[must_use]
    pub fn is_safe(&self, edge: &Edge) -> bool {
        !(self.contains_vertex(edge.tail()) && self.contains_vertex(edge.head()))
    }

    /// Accepts an edge, absorbing both endpoints. No-op for an edge already
    /// accepted.
    pub fn add_edge(&mut self, edge: &Edge) {
        if self.contains_edge(edge) {
            return;
        }
        self.vertices.insert(edge.tail());
        self.vertices.insert(edge.head());
        self.edges.push(edge.clone());
    }

    /// Adds a bare vertex.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.vertices.insert(vertex);
    }

    /// Unions another component into this one, duplicate-safe.
    pub fn merge(&mut self, other: Self) {
        for vertex in other.vertices {
            self.vertices.insert(vertex);
        }
        for edge in other.edges {
            if !self.contains_edge(&edge) {
                self.edges.push(edge);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn add_edge_absorbs_endpoints() {
        let mut c = ConnectedComponent::new();
        c.add_edge(&Edge::new(v(1), v(2), 1.0));
        assert_eq!(c.vertex_count(), 2);
        assert_eq!(c.edge_count(), 1);
        assert!(c.contains_vertex(v(1)));
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let mut c = ConnectedComponent::new();
        c.add_edge(&Edge::new(v(1), v(2), 1.0));
        c.add_edge(&Edge::new(v(2), v(1), 1.0)); // equal under unordered comparison
        assert_eq!(c.edge_count(), 1);
    }

    #[test]
    fn safety_predicate() {
        let mut c = ConnectedComponent::new();
        c.add_edge(&Edge::new(v(1), v(2), 1.0));
        assert!(!c.is_safe(&Edge::new(v(1), v(2), 5.0)));
        assert!(c.is_safe(&Edge::new(v(2), v(3), 1.0)));
        assert!(c.is_safe(&Edge::new(v(3), v(4), 1.0)));
    }

    #[test]
    fn merge_unions_without_duplicates() {
        let mut a = ConnectedComponent::new();
        a.add_edge(&Edge::new(v(1), v(2), 1.0));
        let mut b = ConnectedComponent::new();
        b.add_edge(&Edge::new(v(2), v(3), 2.0));
        b.add_edge(&Edge::new(v(1), v(2), 1.0));

        a.merge(b);
        assert_eq!(a.vertex_count(), 3);
        assert_eq!(a.edge_count(), 2);
    }
}
