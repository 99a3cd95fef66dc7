//! Acyclicity and topological ordering (directed graphs only).

use std::collections::VecDeque;

use ostov_common::{Error, Label, Result, VertexId};
use tracing::debug;

use crate::graph::Graph;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Clean,
    Active,
    Done,
}

impl<V: Label> Graph<V> {
    /// Returns true iff the graph contains no directed cycle.
    ///
    /// Marked depth-first search over out-edges from every vertex: a walk
    /// that revisits a vertex still on its active path has found a cycle.
    /// Marks live in a per-call side table, so the graph is untouched.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        let mut marks = vec![Mark::Clean; self.vertex_count()];
        for root in self.vertices() {
            if marks[root.index()] == Mark::Clean && self.cycle_from(root, &mut marks) {
                debug!(root = %root, "directed cycle detected");
                return false;
            }
        }
        true
    }

    fn cycle_from(&self, root: VertexId, marks: &mut [Mark]) -> bool {
        // explicit stack of (vertex, next-child cursor)
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        marks[root.index()] = Mark::Active;

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let onward = self.reachable(vertex);
            if frame.1 < onward.len() {
                let next = onward[frame.1];
                frame.1 += 1;
                match marks[next.index()] {
                    Mark::Active => return true,
                    Mark::Clean => {
                        marks[next.index()] = Mark::Active;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            } else {
                marks[vertex.index()] = Mark::Done;
                stack.pop();
            }
        }
        false
    }

    /// Topological order: a vertex sequence in which every edge's tail
    /// precedes its head.
    ///
    /// Source-seeded frontier expansion: vertices of in-degree 0 enter the
    /// frontier first, and a processed vertex releases each successor once
    /// all of that successor's incoming edges have been consumed. Vertices
    /// leave the frontier in discovery order, so the result is deterministic
    /// for a given edge load order.
    ///
    /// # Errors
    ///
    /// [`Error::CycleDetected`] if the graph is not acyclic.
    pub fn topological_sort(&self) -> Result<Vec<VertexId>> {
        let mut remaining: Vec<usize> = self.vertices().map(|v| self.in_degree(v)).collect();
        let mut frontier: VecDeque<VertexId> =
            self.vertices().filter(|&v| self.is_source(v)).collect();
        let mut order = Vec::with_capacity(self.vertex_count());

        while let Some(vertex) = frontier.pop_front() {
            order.push(vertex);
            for edge in self.out_edges(vertex) {
                let head = edge.head().index();
                remaining[head] -= 1;
                if remaining[head] == 0 {
                    frontier.push_back(edge.head());
                }
            }
        }

        if order.len() != self.vertex_count() {
            return Err(Error::CycleDetected);
        }
        Ok(order)
    }
}
