//! # Ostov
//!
//! A pure-Rust weighted multigraph analysis engine.
//!
//! If you're new here, start with [`GraphBuilder`] - that's your entry point
//! for loading a graph - then call queries on [`Graph`] or hand it to the
//! algorithm functions. The engine is a synchronous in-memory computation
//! layer: no I/O, no locking, no persistence. Parsing edge-list files and
//! rendering results belong to the surrounding application.
//!
//! ## What's inside
//!
//! | Area | Entry points |
//! | ---- | ------------ |
//! | Structural queries | [`Graph::degree`], [`Graph::pendant_vertices`], [`Graph::to_simple_graph`], ... |
//! | Connectivity | [`Graph::connected_components`], [`Graph::spanning_tree`] |
//! | Ordering | [`Graph::is_acyclic`], [`Graph::topological_sort`] |
//! | Strong connectivity | [`strongly_connected_components`], [`condensation`] |
//! | Spanning trees | [`prim`], [`kruskal`], [`boruvka`] |
//! | Shortest paths | [`shortest_paths`], [`dijkstra`], [`bfs_paths`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use ostov::{kruskal, GraphBuilder};
//!
//! let graph = GraphBuilder::<u32>::new(4)
//!     .ordered()
//!     .weighted_edge(1, 2, 1.0)
//!     .weighted_edge(2, 3, 2.0)
//!     .weighted_edge(3, 4, 1.0)
//!     .weighted_edge(1, 4, 5.0)
//!     .build()?;
//!
//! let tree = kruskal(&graph);
//! assert!(tree.spanning);
//! assert_eq!(tree.total_weight, 4.0);
//! # Ok::<(), ostov::Error>(())
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the core model
pub use ostov_core::{
    ConnectedComponent, Edge, FifoBag, Frontier, Graph, GraphBuilder, LifoBag, PriorityBag,
    Strategy, TraversalMode,
};

// Re-export the algorithm surface
pub use ostov_algorithms::{
    bfs_paths, boruvka, condensation, dijkstra, kruskal, prim, shortest_paths,
    strongly_connected_components, MstOutcome, PathTo, SccResult, ShortestPaths,
};

// Re-export foundation types - you'll need these for handles and errors
pub use ostov_common::{Error, Label, OrdinalLabel, Result, VertexId};
