#![deny(missing_docs)]

//! Core matrix, error and RNG types for the degree-preserving rewiring engine.
//!
//! Graphs are dense symmetric weight matrices ([`AdjacencyMatrix`]); a weight
//! of exactly `0.0` means "no edge". Every run threads an explicit
//! [`RngHandle`] so results are reproducible from a seed.

pub mod errors;
pub mod matrix;
pub mod rng;

pub use errors::{BudgetReport, ErrorInfo, RewireError};
pub use matrix::{AdjacencyMatrix, Matrix};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a vertex, i.e. a row/column index of the adjacency matrix.
pub type VertexId = usize;
