//! Positional-argument adapter for host environments that call the engine as
//! `(graph, rewires_per_edge[, constraint])`.

use rand::Rng;
use rewire_core::errors::{ErrorInfo, RewireError};
use rewire_core::{AdjacencyMatrix, Matrix};

use crate::engine::{rewire_with, NoopObserver};
use crate::limits::RewireLimits;

/// Minimum number of positional inputs.
pub const MIN_INPUTS: usize = 2;
/// Maximum number of positional inputs.
pub const MAX_INPUTS: usize = 3;

/// A positional value handed over by a host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Real-valued matrix.
    Matrix(Matrix<f64>),
    /// Real scalar.
    Scalar(f64),
}

impl HostValue {
    fn kind(&self) -> &'static str {
        match self {
            HostValue::Matrix(_) => "matrix",
            HostValue::Scalar(_) => "scalar",
        }
    }
}

/// Validates positional inputs and runs the rewiring.
///
/// Every check (count, kinds, shapes) completes before the RNG is used.
pub fn invoke<R: Rng + ?Sized>(
    inputs: &[HostValue],
    limits: &RewireLimits,
    rng: &mut R,
) -> Result<AdjacencyMatrix, RewireError> {
    if inputs.len() < MIN_INPUTS || inputs.len() > MAX_INPUTS {
        return Err(RewireError::ArgumentCount(
            ErrorInfo::new(
                "input-count",
                "incorrect number of input arguments",
            )
            .with_context("supplied", inputs.len().to_string())
            .with_context("min", MIN_INPUTS.to_string())
            .with_context("max", MAX_INPUTS.to_string())
            .with_hint("expected (graph, rewires_per_edge[, constraint])"),
        ));
    }
    let graph = expect_matrix(&inputs[0], 0)?;
    graph.ensure_square()?;
    let rewires_per_edge = expect_count(&inputs[1], 1)?;
    let constraint = match inputs.get(2) {
        Some(value) => Some(expect_matrix(value, 2)?),
        None => None,
    };

    let outcome = rewire_with(
        graph,
        rewires_per_edge,
        constraint,
        limits,
        rng,
        &mut NoopObserver,
    )?;
    Ok(outcome.graph)
}

fn expect_matrix(value: &HostValue, position: usize) -> Result<&Matrix<f64>, RewireError> {
    match value {
        HostValue::Matrix(matrix) => Ok(matrix),
        other => Err(type_error(position, "matrix", other.kind())),
    }
}

/// Accepts a scalar or a 1x1 matrix, truncating toward zero.
fn expect_count(value: &HostValue, position: usize) -> Result<u64, RewireError> {
    let raw = match value {
        HostValue::Scalar(raw) => *raw,
        HostValue::Matrix(matrix) if matrix.shape() == (1, 1) => matrix[(0, 0)],
        other => return Err(type_error(position, "scalar", other.kind())),
    };
    if !raw.is_finite() || raw < 0.0 {
        return Err(RewireError::ArgumentType(
            ErrorInfo::new(
                "invalid-count",
                "rewires per edge must be a finite non-negative number",
            )
            .with_context("position", position.to_string())
            .with_context("value", raw.to_string()),
        ));
    }
    Ok(raw.trunc() as u64)
}

fn type_error(position: usize, expected: &str, found: &str) -> RewireError {
    RewireError::ArgumentType(
        ErrorInfo::new("input-type", "input has the wrong kind")
            .with_context("position", position.to_string())
            .with_context("expected", expected)
            .with_context("found", found),
    )
}
