//! # ostov-common
//!
//! Foundation layer for Ostov: vertex handles, label traits, hash map
//! aliases, and the error taxonomy.
//!
//! This crate provides the building blocks shared by all other Ostov crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions ([`VertexId`], [`Label`], [`OrdinalLabel`])
//! - [`error`] - The [`Error`] enum and [`Result`] alias
//! - [`hash`] - Fast hash map/set aliases ([`FxHashMap`], [`FxHashSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use hash::{FxHashMap, FxHashSet};
pub use types::{Label, OrdinalLabel, VertexId};
