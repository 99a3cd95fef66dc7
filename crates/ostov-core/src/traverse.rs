//! Reachability walks, connected components, and spanning-tree preorder.
//!
//! The iterative walk is the primary implementation (stack depth bounded by
//! an explicit work list); the recursive walk is kept as the correctness
//! reference. Both produce identical vertex sets, and the iterative walk
//! preserves recursive preorder.

use ostov_common::{Label, VertexId};
use tracing::debug;

use crate::graph::Graph;

/// Adjacency view used by a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    /// Follow symmetric neighbour links.
    Undirected,
    /// Follow directed out-edges only.
    Directed,
}

/// Walk implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Explicit work-stack walk; recommended (no recursion-depth limit).
    Iterative,
    /// Recursive reference walk; depth bounded by vertex count.
    Recursive,
}

impl<V: Label> Graph<V> {
    fn adjacent(&self, vertex: VertexId, mode: TraversalMode) -> &[VertexId] {
        match mode {
            TraversalMode::Undirected => self.neighbours(vertex),
            TraversalMode::Directed => self.reachable(vertex),
        }
    }

    /// Depth-first preorder of every vertex reachable from `start`,
    /// including `start` itself.
    #[must_use]
    pub fn reachable_set(
        &self,
        start: VertexId,
        mode: TraversalMode,
        strategy: Strategy,
    ) -> Vec<VertexId> {
        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        self.walk(start, mode, strategy, &mut visited, &mut order);
        order
    }

    fn walk(
        &self,
        start: VertexId,
        mode: TraversalMode,
        strategy: Strategy,
        visited: &mut [bool],
        order: &mut Vec<VertexId>,
    ) {
        match strategy {
            Strategy::Iterative => {
                let mut stack = vec![start];
                while let Some(vertex) = stack.pop() {
                    if visited[vertex.index()] {
                        continue;
                    }
                    visited[vertex.index()] = true;
                    order.push(vertex);
                    // reversed push keeps recursive preorder
                    for &next in self.adjacent(vertex, mode).iter().rev() {
                        if !visited[next.index()] {
                            stack.push(next);
                        }
                    }
                }
            }
            Strategy::Recursive => self.walk_recursive(start, mode, visited, order),
        }
    }

    fn walk_recursive(
        &self,
        vertex: VertexId,
        mode: TraversalMode,
        visited: &mut [bool],
        order: &mut Vec<VertexId>,
    ) {
        if visited[vertex.index()] {
            return;
        }
        visited[vertex.index()] = true;
        order.push(vertex);
        for &next in self.adjacent(vertex, mode) {
            self.walk_recursive(next, mode, visited, order);
        }
    }

    /// Partitions the vertices into components by repeated reachability
    /// walks from unvisited vertices, in arena order.
    ///
    /// With [`TraversalMode::Directed`] the partition is by out-reachability
    /// from the walk roots, not by strong connectivity.
    #[must_use]
    pub fn connected_components(
        &self,
        mode: TraversalMode,
        strategy: Strategy,
    ) -> Vec<Vec<VertexId>> {
        let mut visited = vec![false; self.vertex_count()];
        let mut components = Vec::new();
        for vertex in self.vertices() {
            if visited[vertex.index()] {
                continue;
            }
            let mut order = Vec::new();
            self.walk(vertex, mode, strategy, &mut visited, &mut order);
            components.push(order);
        }
        debug!(components = components.len(), ?mode, "component walk done");
        components
    }

    /// DFS spanning-tree preorder from `root` over neighbour links: each
    /// newly discovered vertex is descended into before its siblings.
    #[must_use]
    pub fn spanning_tree(&self, root: VertexId) -> Vec<VertexId> {
        self.reachable_set(root, TraversalMode::Undirected, Strategy::Iterative)
    }
}
