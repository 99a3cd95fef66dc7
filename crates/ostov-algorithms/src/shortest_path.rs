//! Single-source shortest paths by generalized Ford-style relaxation.
//!
//! The relaxation loop is parametrized over a [`Frontier`]: a priority bag
//! yields Dijkstra-like efficiency, a plain queue or stack yields
//! Bellman-Ford-like robustness, and correctness follows from exhaustive
//! relaxation either way (termination assumes non-negative weights).

use ostov_common::{Error, Label, Result, VertexId};
use ostov_core::bag::{FifoBag, Frontier, PriorityBag};
use ostov_core::graph::Graph;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One reachable destination: its final distance and the full path from the
/// source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathTo {
    /// The destination vertex.
    pub target: VertexId,
    /// Sum of edge weights along the path.
    pub distance: f64,
    /// Vertices from the source to the destination, inclusive.
    pub path: Vec<VertexId>,
}

/// Result of a shortest-path computation: every destination whose
/// predecessor chain reaches the source, in arena order. Unreachable
/// vertices are simply absent (a soft result, not an error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// The source vertex.
    pub source: VertexId,
    /// Reached destinations, the source itself included.
    pub reached: Vec<PathTo>,
}

impl ShortestPaths {
    /// The distance to `target`, if reached.
    #[must_use]
    pub fn distance(&self, target: VertexId) -> Option<f64> {
        self.reached
            .iter()
            .find(|p| p.target == target)
            .map(|p| p.distance)
    }

    /// The source-to-`target` path, if reached.
    #[must_use]
    pub fn path(&self, target: VertexId) -> Option<&[VertexId]> {
        self.reached
            .iter()
            .find(|p| p.target == target)
            .map(|p| p.path.as_slice())
    }

    /// Number of reached destinations (source included).
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.reached.len()
    }
}

/// Computes shortest paths from the vertex labeled `source`, exploring in
/// the order dictated by `frontier`.
///
/// Every directed out-edge of a popped vertex is relaxed (parallel edges
/// individually); an improved vertex re-enters the frontier with its new
/// distance as priority. Distance and predecessor state live in call-scoped
/// side tables, so repeated and concurrent runs over the same graph are
/// sound.
///
/// # Errors
///
/// [`Error::UnknownVertex`] if `source` is not a vertex of the graph.
pub fn shortest_paths<V: Label, F: Frontier>(
    graph: &Graph<V>,
    source: &V,
    frontier: &mut F,
) -> Result<ShortestPaths> {
    let Some(root) = graph.vertex(source) else {
        return Err(Error::UnknownVertex(source.to_string()));
    };

    let mut dist = vec![f64::INFINITY; graph.vertex_count()];
    let mut pred: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    dist[root.index()] = 0.0;
    frontier.push(root, 0.0);

    while let Some(u) = frontier.pop() {
        for edge in graph.out_edges(u) {
            let v = edge.head();
            let candidate = dist[u.index()] + edge.weight();
            if candidate < dist[v.index()] {
                trace!(from = %u, to = %v, candidate, "relaxed");
                dist[v.index()] = candidate;
                pred[v.index()] = Some(u);
                frontier.push(v, candidate);
            }
        }
    }

    let mut reached = Vec::new();
    for target in graph.vertices() {
        if dist[target.index()].is_infinite() {
            continue;
        }
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(previous) = pred[cursor.index()] {
            path.push(previous);
            cursor = previous;
        }
        // only chains ending at the source count as reached
        if cursor != root {
            continue;
        }
        path.reverse();
        reached.push(PathTo {
            target,
            distance: dist[target.index()],
            path,
        });
    }

    debug!(source = %root, reached = reached.len(), "shortest paths done");
    Ok(ShortestPaths {
        source: root,
        reached,
    })
}

/// Shortest paths with a priority frontier (Dijkstra exploration order).
pub fn dijkstra<V: Label>(graph: &Graph<V>, source: &V) -> Result<ShortestPaths> {
    shortest_paths(graph, source, &mut PriorityBag::new())
}

/// Shortest paths with a FIFO frontier (Bellman-Ford-like exploration
/// order).
pub fn bfs_paths<V: Label>(graph: &Graph<V>, source: &V) -> Result<ShortestPaths> {
    shortest_paths(graph, source, &mut FifoBag::new())
}
