//! Independent null-model replicates executed on a rayon pool.

use rayon::prelude::*;
use rewire_core::errors::{ErrorInfo, RewireError};
use rewire_core::{derive_substream_seed, AdjacencyMatrix, Matrix, RngHandle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SeedPolicy;
use crate::engine::{check_constraint_shape, rewire_with, NoopObserver, RewireOutcome};
use crate::hash::canonical_hash;
use crate::limits::RewireLimits;

/// How many replicates to produce and how to seed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsemblePlan {
    /// Seed from which every replicate stream is derived.
    pub master_seed: u64,
    /// Number of replicates.
    pub replicas: usize,
    /// Worker threads; results do not depend on this value.
    pub threads: usize,
}

impl From<&SeedPolicy> for EnsemblePlan {
    fn from(policy: &SeedPolicy) -> Self {
        Self {
            master_seed: policy.master_seed,
            replicas: policy.replicas,
            threads: policy.threads,
        }
    }
}

/// One finished replicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicaOutcome {
    /// Position of the replicate in the ensemble.
    pub replica: usize,
    /// Seed the replicate's RNG was created from.
    pub seed: u64,
    /// Canonical hash of the rewired matrix.
    pub hash: String,
    /// Rewired graph and counters.
    pub outcome: RewireOutcome,
}

/// Derives the deterministic seed used for a specific replicate.
pub fn replica_seed(master_seed: u64, replica: usize) -> u64 {
    derive_substream_seed(master_seed, replica as u64)
}

/// Rewires private copies of `graph` once per replicate.
///
/// Replicates share `graph` and `constraint` read-only and own everything they
/// mutate. Results come back in replicate order and are identical for any
/// thread count. The first failing replicate aborts the ensemble.
pub fn rewire_ensemble<C>(
    graph: &AdjacencyMatrix,
    rewires_per_edge: u64,
    constraint: Option<&Matrix<C>>,
    limits: &RewireLimits,
    plan: &EnsemblePlan,
) -> Result<Vec<ReplicaOutcome>, RewireError>
where
    C: PartialEq + Sync,
{
    graph.ensure_square()?;
    if let Some(constraint) = constraint {
        check_constraint_shape(graph, constraint)?;
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(plan.threads.max(1))
        .build()
        .map_err(|err| RewireError::Config(ErrorInfo::new("thread-pool", err.to_string())))?;

    info!(
        replicas = plan.replicas,
        threads = plan.threads,
        master_seed = plan.master_seed,
        "running rewiring ensemble"
    );
    pool.install(|| {
        (0..plan.replicas)
            .into_par_iter()
            .map(|replica| -> Result<ReplicaOutcome, RewireError> {
                let seed = replica_seed(plan.master_seed, replica);
                let mut rng = RngHandle::from_seed(seed);
                let outcome = rewire_with(
                    graph,
                    rewires_per_edge,
                    constraint,
                    limits,
                    &mut rng,
                    &mut NoopObserver,
                )?;
                Ok(ReplicaOutcome {
                    replica,
                    seed,
                    hash: canonical_hash(&outcome.graph),
                    outcome,
                })
            })
            .collect()
    })
}
