use std::fs;
use std::path::Path;

use rewire_core::errors::{ErrorInfo, RewireError};
use serde::{Deserialize, Serialize};

use crate::limits::RewireLimits;

/// YAML-configurable parameters governing a rewiring run or ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RewireConfig {
    /// Successful swaps per edge; `0` selects `limits.default_rewires_per_edge`.
    #[serde(default)]
    pub rewires_per_edge: u64,
    /// Attempt budget and defaults.
    #[serde(default)]
    pub limits: RewireLimits,
    /// Master seed and replicate layout.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Number of independent replicates produced by an ensemble run.
    #[serde(default = "default_replicas")]
    pub replicas: usize,
    /// Worker threads used for ensembles.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

fn default_replicas() -> usize {
    1
}

fn default_threads() -> usize {
    1
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            replicas: default_replicas(),
            threads: default_threads(),
        }
    }
}

impl RewireConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RewireError> {
        let config: RewireConfig = serde_yaml::from_str(yaml)
            .map_err(|err| RewireError::Config(ErrorInfo::new("parse-yaml", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, RewireError> {
        let text = fs::read_to_string(path).map_err(|err| {
            RewireError::Serde(
                ErrorInfo::new("read-config", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, RewireError> {
        serde_yaml::to_string(self)
            .map_err(|err| RewireError::Config(ErrorInfo::new("serialize-yaml", err.to_string())))
    }

    /// Rejects configurations that can never produce output.
    pub fn validate(&self) -> Result<(), RewireError> {
        if self.seed_policy.replicas == 0 {
            return Err(RewireError::Config(ErrorInfo::new(
                "zero-replicas",
                "seed_policy.replicas must be at least 1",
            )));
        }
        if self.seed_policy.threads == 0 {
            return Err(RewireError::Config(ErrorInfo::new(
                "zero-threads",
                "seed_policy.threads must be at least 1",
            )));
        }
        if self.limits.default_rewires_per_edge == 0 {
            return Err(RewireError::Config(
                ErrorInfo::new(
                    "zero-default-rewires",
                    "limits.default_rewires_per_edge must be at least 1",
                )
                .with_hint("omit the field to use the built-in default of 4"),
            ));
        }
        Ok(())
    }
}
