//! # ostov-core
//!
//! The graph model for Ostov: construction, structural queries, and traversal
//! primitives. It depends only on `ostov-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Arena-backed [`Graph`], [`Edge`], and [`GraphBuilder`]
//! - [`traverse`] - Component walks and spanning-tree preorder
//! - [`order`] - Acyclicity and topological ordering
//! - [`component`] - The [`ConnectedComponent`] accumulator
//! - [`bag`] - The [`Frontier`] abstraction (FIFO / LIFO / priority)
//!
//! The graph is immutable after [`GraphBuilder::build`]; every algorithm
//! keeps its traversal state in side tables scoped to the call, so shared
//! `&Graph` access is safe and reentrant.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bag;
pub mod component;
pub mod graph;
pub mod order;
pub mod traverse;

// Re-export commonly used types
pub use bag::{FifoBag, Frontier, LifoBag, MinScored, PriorityBag};
pub use component::ConnectedComponent;
pub use graph::{Edge, Graph, GraphBuilder};
pub use traverse::{Strategy, TraversalMode};
