//! Structural checks shared by callers, the CLI and the test-suite.

use rewire_core::AdjacencyMatrix;
use serde::{Deserialize, Serialize};

/// Number of nonzero off-diagonal entries in each row.
pub fn degree_sequence(graph: &AdjacencyMatrix) -> Vec<usize> {
    graph
        .row_iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(j, weight)| j != i && *weight != 0.0)
                .count()
        })
        .collect()
}

/// Sorted nonzero weights of the strict lower triangle.
///
/// Sorting uses `f64::total_cmp`, so NaN weights compare consistently.
pub fn weight_multiset(graph: &AdjacencyMatrix) -> Vec<f64> {
    let mut weights: Vec<f64> = graph
        .row_iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().take(i).copied())
        .filter(|weight| *weight != 0.0)
        .collect();
    weights.sort_by(f64::total_cmp);
    weights
}

/// Whether `graph(i, j)` and `graph(j, i)` hold the same bits for all pairs.
pub fn is_symmetric(graph: &AdjacencyMatrix) -> bool {
    if !graph.is_square() {
        return false;
    }
    let n = graph.rows();
    (0..n).all(|i| (0..i).all(|j| graph[(i, j)].to_bits() == graph[(j, i)].to_bits()))
}

/// Whether any diagonal entry is nonzero.
pub fn has_self_loops(graph: &AdjacencyMatrix) -> bool {
    let n = graph.rows().min(graph.cols());
    (0..n).any(|i| graph[(i, i)] != 0.0)
}

/// Result of comparing a rewired graph against the graph it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullModelCheck {
    /// Both matrices have the same shape.
    pub same_shape: bool,
    /// Every vertex keeps its degree.
    pub degrees_preserved: bool,
    /// The nonzero weight multiset is unchanged.
    pub weights_preserved: bool,
    /// The rewired matrix is symmetric.
    pub symmetric: bool,
    /// The rewired matrix has no diagonal entries.
    pub loop_free: bool,
    /// Number of lower-triangle positions whose edge presence changed.
    pub moved_edges: usize,
}

impl NullModelCheck {
    /// Whether the rewired graph is a valid null model of the original.
    pub fn is_valid(&self) -> bool {
        self.same_shape
            && self.degrees_preserved
            && self.weights_preserved
            && self.symmetric
            && self.loop_free
    }
}

/// Compares `rewired` against `original`.
pub fn compare_null_model(original: &AdjacencyMatrix, rewired: &AdjacencyMatrix) -> NullModelCheck {
    let same_shape = original.shape() == rewired.shape();
    let original_weights = weight_multiset(original);
    let rewired_weights = weight_multiset(rewired);
    let weights_preserved = original_weights.len() == rewired_weights.len()
        && original_weights
            .iter()
            .zip(&rewired_weights)
            .all(|(a, b)| a.to_bits() == b.to_bits());
    let moved_edges = if same_shape {
        let n = original.rows();
        (0..n)
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .filter(|&(i, j)| (original[(i, j)] != 0.0) != (rewired[(i, j)] != 0.0))
            .count()
    } else {
        0
    };
    NullModelCheck {
        same_shape,
        degrees_preserved: same_shape && degree_sequence(original) == degree_sequence(rewired),
        weights_preserved,
        symmetric: is_symmetric(rewired),
        loop_free: !has_self_loops(rewired),
        moved_edges,
    }
}
