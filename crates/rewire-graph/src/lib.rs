#![deny(missing_docs)]

//! Degree-preserving rewiring of weighted undirected graphs.
//!
//! A graph is a dense symmetric [`AdjacencyMatrix`](rewire_core::AdjacencyMatrix).
//! [`extract_edges`] indexes its edges, then [`Rewirer`] performs randomized
//! double edge swaps `(v1, v2), (v3, v4) -> (v1, v3), (v2, v4)` until the
//! requested number of swaps succeeded or the attempt budget in
//! [`RewireLimits`] is spent. Degrees and the multiset of edge weights never
//! change. An optional constraint matrix restricts swaps to edges whose
//! constraint values agree.

mod config;
mod edges;
mod engine;
mod ensemble;
mod generators;
mod hash;
pub mod host;
mod invariants;
mod limits;
mod serialization;

pub use config::{RewireConfig, SeedPolicy};
pub use edges::{extract_edges, Edge, EdgeList, WorkingGraph};
pub use engine::{
    rewire, rewire_constrained, rewire_with, AttemptOutcome, NoopObserver, RewireOutcome,
    RewireStats, Rewirer, SwapEvent, SwapObserver,
};
pub use ensemble::{replica_seed, rewire_ensemble, EnsemblePlan, ReplicaOutcome};
pub use generators::{complete_graph, gen_gnp, ring_graph};
pub use hash::canonical_hash;
pub use invariants::{
    compare_null_model, degree_sequence, has_self_loops, is_symmetric, weight_multiset,
    NullModelCheck,
};
pub use limits::{RewireLimits, DEFAULT_REWIRES_PER_EDGE, MAX_ATTEMPTS};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{matrix_from_bytes, matrix_from_json, matrix_to_bytes, matrix_to_json};
