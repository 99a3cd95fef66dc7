//! Pluggable traversal containers ("bags").
//!
//! The shortest-path relaxation loop is parametrized over a [`Frontier`]:
//! the same skeleton realizes breadth-first (queue), depth-first (stack), or
//! Dijkstra-like (priority) exploration order. Container choice changes the
//! exploration order and the repeated-relaxation count, never correctness.

use std::collections::{BinaryHeap, VecDeque};

use ostov_common::VertexId;

/// A work container for relaxation-based algorithms.
///
/// FIFO and LIFO bags ignore the priority argument; the priority bag pops
/// the vertex with the smallest priority first.
pub trait Frontier {
    /// Inserts a vertex with the given priority.
    fn push(&mut self, vertex: VertexId, priority: f64);
    /// Removes and returns the next vertex.
    fn pop(&mut self) -> Option<VertexId>;
    /// Returns the next vertex without removing it.
    fn peek(&self) -> Option<VertexId>;
    /// Number of queued entries.
    fn len(&self) -> usize;
    /// Whether the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out frontier: breadth-first exploration.
#[derive(Debug, Default)]
pub struct FifoBag(VecDeque<VertexId>);

impl FifoBag {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoBag {
    fn push(&mut self, vertex: VertexId, _priority: f64) {
        self.0.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop_front()
    }

    fn peek(&self) -> Option<VertexId> {
        self.0.front().copied()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last-in, first-out frontier: depth-first exploration.
#[derive(Debug, Default)]
pub struct LifoBag(Vec<VertexId>);

impl LifoBag {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoBag {
    fn push(&mut self, vertex: VertexId, _priority: f64) {
        self.0.push(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop()
    }

    fn peek(&self) -> Option<VertexId> {
        self.0.last().copied()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Score-value pair ordered so that the *smallest* score wins in a max-heap.
///
/// NaN scores sort last; equal scores fall back to vertex order so the heap
/// ordering stays total.
#[derive(Debug, Clone, Copy)]
pub struct MinScored(pub f64, pub VertexId);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for MinScored {}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // reversed: a smaller score is "greater" so BinaryHeap pops it first
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or_else(|| match (self.0.is_nan(), other.0.is_nan()) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => std::cmp::Ordering::Equal,
            })
            .then_with(|| other.1.cmp(&self.1))
    }
}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier keyed by the push-time priority: Dijkstra-like
/// exploration, cheapest vertex first.
#[derive(Debug, Default)]
pub struct PriorityBag(BinaryHeap<MinScored>);

impl PriorityBag {
    /// Creates an empty priority queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityBag {
    fn push(&mut self, vertex: VertexId, priority: f64) {
        self.0.push(MinScored(priority, vertex));
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop().map(|MinScored(_, vertex)| vertex)
    }

    fn peek(&self) -> Option<VertexId> {
        self.0.peek().map(|&MinScored(_, vertex)| vertex)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut bag = FifoBag::new();
        bag.push(v(1), 9.0);
        bag.push(v(2), 1.0);
        assert_eq!(bag.peek(), Some(v(1)));
        assert_eq!(bag.pop(), Some(v(1)));
        assert_eq!(bag.pop(), Some(v(2)));
        assert_eq!(bag.pop(), None);
    }

    #[test]
    fn lifo_pops_in_reverse_order() {
        let mut bag = LifoBag::new();
        bag.push(v(1), 0.0);
        bag.push(v(2), 0.0);
        assert_eq!(bag.pop(), Some(v(2)));
        assert_eq!(bag.pop(), Some(v(1)));
    }

    #[test]
    fn priority_pops_cheapest_first() {
        let mut bag = PriorityBag::new();
        bag.push(v(1), 5.0);
        bag.push(v(2), 1.0);
        bag.push(v(3), 3.0);
        assert_eq!(bag.pop(), Some(v(2)));
        assert_eq!(bag.pop(), Some(v(3)));
        assert_eq!(bag.pop(), Some(v(1)));
        assert!(bag.is_empty());
    }

    #[test]
    fn min_scored_handles_nan() {
        let mut bag = PriorityBag::new();
        bag.push(v(1), f64::NAN);
        bag.push(v(2), 1.0);
        assert_eq!(bag.pop(), Some(v(2)));
    }
}
