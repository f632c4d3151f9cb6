use std::path::Path;

use rewire_core::errors::RewireError;
use rewire_core::Matrix;
use rewire_graph::RewireConfig;

use crate::io::read_matrix;

pub mod ensemble;
pub mod rewire;
pub mod verify;

/// Loads the YAML config when given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<RewireConfig, RewireError> {
    match path {
        Some(path) => RewireConfig::load(path),
        None => Ok(RewireConfig::default()),
    }
}

fn load_constraint(path: Option<&Path>) -> Result<Option<Matrix<f64>>, RewireError> {
    path.map(read_matrix).transpose()
}

/// Applies `--per-edge`, `--max-attempts` and `--seed` on top of the config.
fn apply_overrides(
    config: &mut RewireConfig,
    per_edge: Option<u64>,
    max_attempts: Option<u64>,
    seed: Option<u64>,
) -> Result<(), RewireError> {
    if let Some(per_edge) = per_edge {
        config.rewires_per_edge = per_edge;
    }
    if let Some(max_attempts) = max_attempts {
        config.limits.max_attempts = max_attempts;
    }
    if let Some(seed) = seed {
        config.seed_policy.master_seed = seed;
    }
    config.validate()
}
