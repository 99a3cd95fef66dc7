//! Core type definitions for Ostov.
//!
//! - Identifier types ([`VertexId`])
//! - Label traits ([`Label`], [`OrdinalLabel`])

mod id;
mod label;

pub use id::VertexId;
pub use label::{Label, OrdinalLabel};
