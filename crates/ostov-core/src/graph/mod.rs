//! Arena-backed weighted multigraph.
//!
//! The graph owns a vertex arena sorted by label value, an edge list in load
//! order, and derived adjacency/degree bookkeeping built once at construction
//! time. Vertices are addressed by [`VertexId`] handles produced by
//! value-keyed interning, so handle equality is label equality.

mod builder;
mod edge;

pub use builder::GraphBuilder;
pub use edge::Edge;

use indexmap::IndexMap;
use ostov_common::{FxHashMap, Label, VertexId};
use smallvec::SmallVec;

/// Per-vertex record in the arena.
///
/// Degrees and both adjacency views are derived while linking edges, never
/// recomputed afterwards. There is no transient traversal state here: every
/// algorithm keeps its marks in side tables scoped to the call.
#[derive(Debug, Clone)]
struct VertexRecord<V> {
    value: V,
    out_degree: usize,
    in_degree: usize,
    /// Symmetric adjacency, deduplicated, in link order.
    neighbours: SmallVec<[VertexId; 4]>,
    /// Directed out-adjacency, deduplicated, in link order.
    reachable: SmallVec<[VertexId; 4]>,
}

impl<V> VertexRecord<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            out_degree: 0,
            in_degree: 0,
            neighbours: SmallVec::new(),
            reachable: SmallVec::new(),
        }
    }
}

/// A weighted directed/undirected multigraph.
///
/// Immutable after construction; all queries are read-only and infallible
/// (empty results are valid results).
#[derive(Debug, Clone)]
pub struct Graph<V: Label> {
    vertices: Vec<VertexRecord<V>>,
    edges: Vec<Edge>,
    by_label: FxHashMap<V, VertexId>,
    /// Edge indices grouped by tail vertex, in load order.
    out_edges: Vec<SmallVec<[u32; 4]>>,
    ordered_labels: bool,
}

impl<V: Label> Graph<V> {
    /// Links `edges` into a pre-seeded, sorted vertex arena.
    ///
    /// `labels` must be sorted and free of duplicates; every edge endpoint
    /// must be present in `labels`. The builder upholds both.
    pub(crate) fn from_parts(labels: Vec<V>, edges: Vec<(V, V, f64)>, ordered: bool) -> Self {
        let mut vertices: Vec<VertexRecord<V>> =
            labels.into_iter().map(VertexRecord::new).collect();
        let by_label: FxHashMap<V, VertexId> = vertices
            .iter()
            .enumerate()
            .map(|(i, r)| (r.value.clone(), VertexId::new(i as u32)))
            .collect();

        let mut out_edges: Vec<SmallVec<[u32; 4]>> = vec![SmallVec::new(); vertices.len()];
        let mut linked = Vec::with_capacity(edges.len());

        for (tail_label, head_label, weight) in edges {
            let tail = by_label[&tail_label];
            let head = by_label[&head_label];

            vertices[tail.index()].out_degree += 1;
            vertices[head.index()].in_degree += 1;

            let tail_rec = &mut vertices[tail.index()];
            if !tail_rec.neighbours.contains(&head) {
                tail_rec.neighbours.push(head);
            }
            if !tail_rec.reachable.contains(&head) {
                tail_rec.reachable.push(head);
            }
            let head_rec = &mut vertices[head.index()];
            if !head_rec.neighbours.contains(&tail) {
                head_rec.neighbours.push(tail);
            }

            out_edges[tail.index()].push(linked.len() as u32);
            linked.push(Edge::new(tail, head, weight));
        }

        Self {
            vertices,
            edges: linked,
            by_label,
            out_edges,
            ordered_labels: ordered,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (parallel edges and loops counted individually).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the labels were declared as the dense range `1..=vertex_count`.
    #[must_use]
    pub const fn has_ordered_labels(&self) -> bool {
        self.ordered_labels
    }

    /// Iterates vertex handles in arena (label-sorted) order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len() as u32).map(VertexId::new)
    }

    /// The edge list in load order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The label of a vertex.
    #[must_use]
    pub fn label(&self, vertex: VertexId) -> &V {
        &self.vertices[vertex.index()].value
    }

    /// Resolves a label to its interned handle.
    #[must_use]
    pub fn vertex(&self, label: &V) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    /// Out-degree (parallel edges counted individually, loops once).
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.vertices[vertex.index()].out_degree
    }

    /// In-degree (parallel edges counted individually, loops once).
    #[must_use]
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.vertices[vertex.index()].in_degree
    }

    /// Degree: count of incident edges with loops counted twice.
    ///
    /// Each edge contributes one to its tail's out-degree and one to its
    /// head's in-degree, so the sum is exactly the undirected degree.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        let rec = &self.vertices[vertex.index()];
        rec.out_degree + rec.in_degree
    }

    /// Every vertex label mapped to its degree, in arena order.
    #[must_use]
    pub fn degree_map(&self) -> IndexMap<V, usize> {
        self.vertices()
            .map(|v| (self.label(v).clone(), self.degree(v)))
            .collect()
    }

    /// True iff the vertex has no incoming edges.
    #[must_use]
    pub fn is_source(&self, vertex: VertexId) -> bool {
        self.in_degree(vertex) == 0
    }

    /// True iff the vertex has no outgoing edges.
    #[must_use]
    pub fn is_sink(&self, vertex: VertexId) -> bool {
        self.out_degree(vertex) == 0
    }

    /// Symmetric adjacency of a vertex, deduplicated, in link order.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> &[VertexId] {
        &self.vertices[vertex.index()].neighbours
    }

    /// Directed out-adjacency of a vertex, deduplicated, in link order.
    #[must_use]
    pub fn reachable(&self, vertex: VertexId) -> &[VertexId] {
        &self.vertices[vertex.index()].reachable
    }

    /// Iterates the edges leaving `vertex` (directed reading).
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edges[vertex.index()]
            .iter()
            .map(move |&i| &self.edges[i as usize])
    }

    /// Vertices of degree 0.
    #[must_use]
    pub fn isolated_vertices(&self) -> Vec<VertexId> {
        self.vertices()
            .filter(|&v| self.degree(v) == 0)
            .collect()
    }

    /// Vertices of degree 1.
    #[must_use]
    pub fn pendant_vertices(&self) -> Vec<VertexId> {
        self.vertices()
            .filter(|&v| self.degree(v) == 1)
            .collect()
    }

    /// Edges incident to a pendant vertex, deduplicated.
    #[must_use]
    pub fn pendant_edges(&self) -> Vec<Edge> {
        let pendants = self.pendant_vertices();
        let mut result: Vec<Edge> = Vec::new();
        for edge in &self.edges {
            let touches = pendants.contains(&edge.tail()) || pendants.contains(&edge.head());
            if touches && !result.contains(edge) {
                result.push(edge.clone());
            }
        }
        result
    }

    /// Distinct looped vertices mapped to their loop count, in first-seen
    /// order.
    #[must_use]
    pub fn loop_vertices_with_multiplicity(&self) -> IndexMap<V, usize> {
        let mut result = IndexMap::new();
        for edge in self.edges.iter().filter(|e| e.is_loop()) {
            let label = self.label(edge.tail()).clone();
            *result.entry(label).or_insert(0) += 1;
        }
        result
    }

    /// Representative edges whose equal-value multiplicity exceeds 1, each
    /// mapped to that multiplicity, in first-seen order.
    #[must_use]
    pub fn parallel_edges_with_multiplicity(&self) -> Vec<(Edge, usize)> {
        let mut result: Vec<(Edge, usize)> = Vec::new();
        for edge in &self.edges {
            if result.iter().any(|(e, _)| e == edge) {
                continue;
            }
            let multiplicity = self.edge_multiplicity(edge);
            if multiplicity > 1 {
                result.push((edge.clone(), multiplicity));
            }
        }
        result
    }

    /// Number of edges equal to `edge` (unordered endpoints plus weight).
    #[must_use]
    pub fn edge_multiplicity(&self, edge: &Edge) -> usize {
        self.edges.iter().filter(|e| *e == edge).count()
    }

    /// Returns a new graph with loops removed and one edge kept per parallel
    /// group. Idempotent.
    #[must_use]
    pub fn to_simple_graph(&self) -> Self {
        let mut kept: Vec<Edge> = Vec::new();
        for edge in &self.edges {
            if edge.is_loop() || kept.contains(edge) {
                continue;
            }
            kept.push(edge.clone());
        }
        let labels: Vec<V> = self.vertices.iter().map(|r| r.value.clone()).collect();
        let edges = kept
            .into_iter()
            .map(|e| {
                (
                    self.label(e.tail()).clone(),
                    self.label(e.head()).clone(),
                    e.weight(),
                )
            })
            .collect();
        Self::from_parts(labels, edges, self.ordered_labels)
    }

    /// Undirected adjacency map: every vertex label to its neighbour labels.
    #[must_use]
    pub fn neighbour_map(&self) -> IndexMap<V, Vec<V>> {
        self.vertices()
            .map(|v| {
                let around = self
                    .neighbours(v)
                    .iter()
                    .map(|&n| self.label(n).clone())
                    .collect();
                (self.label(v).clone(), around)
            })
            .collect()
    }

    /// Directed adjacency map: every vertex label to its out-reachable
    /// labels.
    #[must_use]
    pub fn directed_neighbour_map(&self) -> IndexMap<V, Vec<V>> {
        self.vertices()
            .map(|v| {
                let onward = self
                    .reachable(v)
                    .iter()
                    .map(|&n| self.label(n).clone())
                    .collect();
                (self.label(v).clone(), onward)
            })
            .collect()
    }

    /// Directed adjacency matrix in arena order: `matrix[t][h]` counts the
    /// edges from the t-th to the h-th vertex, parallel edges individually.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<usize>> {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0usize; n]; n];
        for edge in &self.edges {
            matrix[edge.tail().index()][edge.head().index()] += 1;
        }
        matrix
    }

    /// Returns the transpose: every edge reversed, weights unchanged.
    ///
    /// The vertex arena is identical, so handles carry over between the
    /// graph and its transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let labels: Vec<V> = self.vertices.iter().map(|r| r.value.clone()).collect();
        let edges = self
            .edges
            .iter()
            .map(|e| {
                (
                    self.label(e.head()).clone(),
                    self.label(e.tail()).clone(),
                    e.weight(),
                )
            })
            .collect();
        Self::from_parts(labels, edges, self.ordered_labels)
    }
}
