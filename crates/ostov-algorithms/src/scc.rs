//! Strongly connected components (Kosaraju) and condensation.
//!
//! A strongly connected component is a maximal vertex set in which every
//! vertex reaches every other. The implementation is the two-pass
//! reachability form of Kosaraju: a vertex's component is the intersection
//! of its out-reachable set in the graph with its out-reachable set in the
//! transpose.

use ostov_common::{Error, Label, Result, VertexId};
use ostov_core::graph::{Graph, GraphBuilder};
use ostov_core::{Strategy, TraversalMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of SCC computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccResult {
    /// Vertices of each component, numbered in discovery order.
    pub members: Vec<Vec<VertexId>>,
    /// Component number of every vertex, indexed by arena position.
    pub component_of: Vec<usize>,
}

impl SccResult {
    /// Number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.members.len()
    }

    /// True iff the whole graph is one component.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.members.len() == 1
    }

    /// The component number of a vertex.
    #[must_use]
    pub fn component(&self, vertex: VertexId) -> usize {
        self.component_of[vertex.index()]
    }
}

/// Computes the strongly connected components of a directed graph.
///
/// Both vertex pools are seeded with non-source vertices first (heuristic
/// ordering, not a strict finish-time order); correctness comes from the
/// reachability intersection. Components are numbered in discovery order,
/// and every vertex lands in exactly one component.
#[must_use]
pub fn strongly_connected_components<V: Label>(graph: &Graph<V>) -> SccResult {
    let transpose = graph.transpose();

    // non-sources first; stable, so arena order breaks ties
    let mut pool: Vec<VertexId> = graph.vertices().collect();
    pool.sort_by_key(|&v| graph.is_source(v));

    let mut component_of = vec![usize::MAX; graph.vertex_count()];
    let mut members: Vec<Vec<VertexId>> = Vec::new();

    for &seed in &pool {
        if component_of[seed.index()] != usize::MAX {
            continue;
        }
        // the transpose shares the arena, so the handle carries over
        let forward = graph.reachable_set(seed, TraversalMode::Directed, Strategy::Iterative);
        let backward = transpose.reachable_set(seed, TraversalMode::Directed, Strategy::Iterative);

        let component: Vec<VertexId> = forward
            .into_iter()
            .filter(|v| backward.contains(v))
            .collect();

        let number = members.len();
        for &vertex in &component {
            component_of[vertex.index()] = number;
        }
        members.push(component);
    }

    debug!(components = members.len(), "kosaraju finished");
    SccResult {
        members,
        component_of,
    }
}

/// Builds the condensation (meta-graph): one super-vertex per component,
/// labeled `component_number + 1`, with deduplicated directed edges between
/// distinct components, weights preserved.
///
/// # Errors
///
/// [`Error::NoComponents`] if `scc` holds no components (empty graph).
pub fn condensation<V: Label>(graph: &Graph<V>, scc: &SccResult) -> Result<Graph<u64>> {
    if scc.members.is_empty() {
        return Err(Error::NoComponents);
    }

    let mut builder = GraphBuilder::<u64>::new(scc.component_count()).ordered();
    let mut kept: Vec<(u64, u64, f64)> = Vec::new();

    for edge in graph.edges() {
        let from = scc.component(edge.tail()) as u64 + 1;
        let to = scc.component(edge.head()) as u64 + 1;
        if from == to {
            continue;
        }
        let candidate = (from, to, edge.weight());
        if kept.contains(&candidate) {
            continue;
        }
        kept.push(candidate);
        builder = builder.weighted_edge(from, to, edge.weight());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looped() -> Graph<u32> {
        // 1->2, 2->3, 3->1, 3->4
        GraphBuilder::new(4)
            .ordered()
            .edge(1, 2)
            .edge(2, 3)
            .edge(3, 1)
            .edge(3, 4)
            .build()
            .unwrap()
    }

    fn labels_of(graph: &Graph<u32>, vertices: &[VertexId]) -> Vec<u32> {
        let mut labels: Vec<u32> = vertices.iter().map(|&v| *graph.label(v)).collect();
        labels.sort_unstable();
        labels
    }

    #[test]
    fn cycle_and_tail() {
        let g = looped();
        let scc = strongly_connected_components(&g);

        assert_eq!(scc.component_count(), 2);
        let mut sizes: Vec<usize> = scc.members.iter().map(Vec::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 3]);

        let big = scc.members.iter().find(|m| m.len() == 3).unwrap();
        assert_eq!(labels_of(&g, big), vec![1, 2, 3]);
    }

    #[test]
    fn every_vertex_in_exactly_one_component() {
        let g = looped();
        let scc = strongly_connected_components(&g);
        let total: usize = scc.members.iter().map(Vec::len).sum();
        assert_eq!(total, g.vertex_count());
        for v in g.vertices() {
            let c = scc.component(v);
            assert!(scc.members[c].contains(&v));
        }
    }

    #[test]
    fn acyclic_graph_has_singleton_components() {
        let g: Graph<u32> = GraphBuilder::new(3)
            .ordered()
            .edge(1, 2)
            .edge(2, 3)
            .build()
            .unwrap();
        let scc = strongly_connected_components(&g);
        assert_eq!(scc.component_count(), 3);
        assert!(scc.members.iter().all(|m| m.len() == 1));
    }

    #[test]
    fn condensation_collapses_the_cycle() {
        let g = looped();
        let scc = strongly_connected_components(&g);
        let meta = condensation(&g, &scc).unwrap();

        assert_eq!(meta.vertex_count(), 2);
        assert_eq!(meta.edge_count(), 1);
        assert!(meta.is_acyclic());

        // the 3->4 edge became the single inter-component edge
        let edge = &meta.edges()[0];
        let from = scc.component(g.vertex(&3).unwrap()) as u64 + 1;
        let to = scc.component(g.vertex(&4).unwrap()) as u64 + 1;
        assert_eq!(*meta.label(edge.tail()), from);
        assert_eq!(*meta.label(edge.head()), to);
    }

    #[test]
    fn condensation_of_empty_scc_fails() {
        let g: Graph<u32> = GraphBuilder::new(0).ordered().build().unwrap();
        let scc = strongly_connected_components(&g);
        assert_eq!(condensation(&g, &scc).unwrap_err(), Error::NoComponents);
    }

    #[test]
    fn strongly_connected_graph_is_one_component() {
        let g: Graph<u32> = GraphBuilder::new(3)
            .ordered()
            .edge(1, 2)
            .edge(2, 3)
            .edge(3, 1)
            .build()
            .unwrap();
        let scc = strongly_connected_components(&g);
        assert!(scc.is_strongly_connected());
    }
}
