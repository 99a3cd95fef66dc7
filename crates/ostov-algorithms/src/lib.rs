//! # ostov-algorithms
//!
//! Algorithm extensions over [`ostov_core::Graph`]: free functions consuming
//! a shared graph reference and producing plain result collections.
//!
//! ## Modules
//!
//! - [`scc`] - Strongly connected components (Kosaraju) and condensation
//! - [`mst`] - Minimum spanning tree: Prim, Kruskal, Boruvka
//! - [`shortest_path`] - Generalized Ford-style relaxation over a [`Frontier`](ostov_core::Frontier)
//!
//! All algorithms keep their state in call-scoped side tables; none mutate
//! the graph, so concurrent runs over the same `&Graph` are sound.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod mst;
pub mod scc;
pub mod shortest_path;

pub use mst::{boruvka, kruskal, prim, MstOutcome};
pub use scc::{condensation, strongly_connected_components, SccResult};
pub use shortest_path::{bfs_paths, dijkstra, shortest_paths, PathTo, ShortestPaths};
