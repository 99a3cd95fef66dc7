//! Minimum spanning tree: Prim, Kruskal, Boruvka.
//!
//! All three consume an undirected weighted graph and return an
//! [`MstOutcome`]. Tie-breaking is a strict `<` comparison on weight with no
//! explicit tie-break rule: ties fall to iteration/insertion order, so the
//! edge sets may differ between algorithms when several minimum-weight trees
//! exist, while the total weight never does.
//!
//! On a disconnected graph the result is the largest-component forest
//! fragment and [`MstOutcome::spanning`] is false; callers must check it
//! rather than assume a full tree.

use ostov_common::{Label, VertexId};
use ostov_core::graph::{Edge, Graph};
use ostov_core::ConnectedComponent;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a spanning-tree construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstOutcome {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: f64,
    /// Whether the accepted edges span every vertex of the graph. False for
    /// a disconnected input (the edges then form the largest-component
    /// fragment only).
    pub spanning: bool,
}

impl MstOutcome {
    /// An empty outcome (edgeless graph).
    #[must_use]
    pub const fn empty(spanning: bool) -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
            spanning,
        }
    }

    /// Number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn outcome<V: Label>(graph: &Graph<V>, edges: Vec<Edge>, covered: usize) -> MstOutcome {
    let total_weight = edges.iter().map(Edge::weight).sum();
    let spanning = covered == graph.vertex_count();
    if !spanning {
        debug!(
            covered,
            vertices = graph.vertex_count(),
            "spanning tree does not cover the graph"
        );
    }
    MstOutcome {
        edges,
        total_weight,
        spanning,
    }
}

/// Prim's algorithm: grow a single frontier from an arbitrary start vertex,
/// repeatedly accepting the cheapest edge crossing the frontier boundary.
#[must_use]
pub fn prim<V: Label>(graph: &Graph<V>) -> MstOutcome {
    let Some(start) = graph.vertices().next() else {
        return MstOutcome::empty(true);
    };

    let mut frontier: Vec<VertexId> = vec![start];
    let mut accepted: Vec<Edge> = Vec::new();

    while frontier.len() != graph.vertex_count() {
        let mut cheapest: Option<&Edge> = None;
        for edge in graph.edges() {
            let tail_in = frontier.contains(&edge.tail());
            let head_in = frontier.contains(&edge.head());
            if tail_in == head_in {
                continue; // not a crossing edge
            }
            if cheapest.is_none_or(|best| edge.weight() < best.weight()) {
                cheapest = Some(edge);
            }
        }

        let Some(edge) = cheapest else {
            break; // no crossing edge left: disconnected
        };
        let outside = if frontier.contains(&edge.tail()) {
            edge.head()
        } else {
            edge.tail()
        };
        frontier.push(outside);
        accepted.push(edge.clone());
    }

    let covered = frontier.len();
    outcome(graph, accepted, covered)
}

/// Kruskal's algorithm: scan edges by ascending weight, accepting each edge
/// that is safe (it cannot close a cycle within any growing component) and
/// merging the components its endpoints belong to.
#[must_use]
pub fn kruskal<V: Label>(graph: &Graph<V>) -> MstOutcome {
    // loops can never be accepted, so an all-loop edge list is as good as
    // an empty one: a single vertex is still trivially spanned
    if graph.edges().iter().all(Edge::is_loop) {
        return MstOutcome::empty(graph.vertex_count() <= 1);
    }

    let mut by_weight: Vec<&Edge> = graph.edges().iter().collect();
    // stable sort: insertion order breaks weight ties
    by_weight.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut components: Vec<ConnectedComponent> = Vec::new();

    for edge in by_weight {
        if edge.is_loop() {
            continue;
        }
        if components.iter().any(|c| !c.is_safe(edge)) {
            continue; // would close a cycle
        }

        let tail_at = components.iter().position(|c| c.contains_vertex(edge.tail()));
        let head_at = components.iter().position(|c| c.contains_vertex(edge.head()));

        match (tail_at, head_at) {
            (None, None) => {
                let mut fresh = ConnectedComponent::new();
                fresh.add_edge(edge);
                components.push(fresh);
            }
            (Some(i), None) | (None, Some(i)) => {
                components[i].add_edge(edge);
            }
            (Some(i), Some(j)) => {
                // distinct components, since the edge was safe; removing the
                // higher index keeps the lower one in place
                let absorbed = components.swap_remove(i.max(j));
                let keep = i.min(j);
                components[keep].merge(absorbed);
                components[keep].add_edge(edge);
            }
        }

        if components
            .iter()
            .any(|c| c.vertex_count() == graph.vertex_count())
        {
            break;
        }
    }

    let largest = components
        .into_iter()
        .max_by_key(ConnectedComponent::vertex_count)
        .unwrap_or_default();
    let covered = largest.vertex_count();
    outcome(graph, largest.edges().to_vec(), covered)
}

/// Boruvka's algorithm: start one component per vertex; in repeated rounds
/// every component accepts its cheapest safe outgoing edge and merges with
/// the neighbouring component, until one component remains or no safe edge
/// is left.
#[must_use]
pub fn boruvka<V: Label>(graph: &Graph<V>) -> MstOutcome {
    if graph.vertex_count() == 0 {
        return MstOutcome::empty(true);
    }

    let mut components: Vec<ConnectedComponent> = graph
        .vertices()
        .map(|v| {
            let mut c = ConnectedComponent::new();
            c.add_vertex(v);
            c
        })
        .collect();

    while components.len() > 1 {
        let mut merged_any = false;
        let mut i = 0;
        while i < components.len() {
            let Some(edge) = cheapest_safe_edge(graph, &components[i]) else {
                i += 1;
                continue;
            };
            let outside = if components[i].contains_vertex(edge.tail()) {
                edge.head()
            } else {
                edge.tail()
            };
            // the safe edge has exactly one endpoint inside, so the other
            // component is always a different one
            let j = components
                .iter()
                .position(|c| c.contains_vertex(outside))
                .unwrap_or(i);
            if j == i {
                i += 1;
                continue;
            }
            // swap_remove(j) moves the last component into slot j, so the
            // grown component lands at j when it was the last one
            let last = components.len() - 1;
            let absorbed = components.swap_remove(j);
            let target = if i == last { j } else { i };
            components[target].merge(absorbed);
            components[target].add_edge(&edge);
            merged_any = true;
            i += 1;
        }
        if !merged_any {
            break; // disconnected: no component can grow further
        }
    }

    let largest = components
        .into_iter()
        .max_by_key(ConnectedComponent::vertex_count)
        .unwrap_or_default();
    let covered = largest.vertex_count();
    outcome(graph, largest.edges().to_vec(), covered)
}

/// The cheapest edge leaving the component: exactly one endpoint inside and
/// safe per [`ConnectedComponent::is_safe`]. Strict `<`, first edge wins
/// ties.
fn cheapest_safe_edge<V: Label>(graph: &Graph<V>, component: &ConnectedComponent) -> Option<Edge> {
    let mut cheapest: Option<&Edge> = None;
    for edge in graph.edges() {
        let incident = component.contains_vertex(edge.tail())
            || component.contains_vertex(edge.head());
        if !incident || !component.is_safe(edge) {
            continue;
        }
        if cheapest.is_none_or(|best| edge.weight() < best.weight()) {
            cheapest = Some(edge);
        }
    }
    cheapest.cloned()
}
