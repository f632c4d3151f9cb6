use rand::Rng;
use rewire_core::errors::{ErrorInfo, RewireError};
use rewire_core::AdjacencyMatrix;

/// Generates a weighted G(n, p) graph with deterministic randomness.
///
/// Each unordered pair is present with probability `p`; present edges get an
/// integer weight drawn uniformly from `1..=max_weight`.
pub fn gen_gnp<R: Rng + ?Sized>(
    n_nodes: usize,
    p: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<AdjacencyMatrix, RewireError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(RewireError::Config(
            ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                .with_context("p", p.to_string()),
        ));
    }
    if max_weight == 0 {
        return Err(RewireError::Config(ErrorInfo::new(
            "invalid-weight",
            "max_weight must be at least 1",
        )));
    }
    let mut graph = AdjacencyMatrix::zeros(n_nodes);
    for i in 0..n_nodes {
        for j in 0..i {
            if rng.gen::<f64>() < p {
                let weight = f64::from(rng.gen_range(1..=max_weight));
                graph[(i, j)] = weight;
                graph[(j, i)] = weight;
            }
        }
    }
    Ok(graph)
}

/// Complete graph on `n_nodes` vertices with a uniform edge weight.
pub fn complete_graph(n_nodes: usize, weight: f64) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::zeros(n_nodes);
    for i in 0..n_nodes {
        for j in 0..n_nodes {
            if i != j {
                graph[(i, j)] = weight;
            }
        }
    }
    graph
}

/// Cycle `0 - 1 - ... - (n-1) - 0`; edge `(k, k+1)` gets weight `k + 1`.
pub fn ring_graph(n_nodes: usize) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::zeros(n_nodes);
    if n_nodes < 3 {
        return graph;
    }
    for k in 0..n_nodes {
        let next = (k + 1) % n_nodes;
        let weight = (k + 1) as f64;
        graph[(k, next)] = weight;
        graph[(next, k)] = weight;
    }
    graph
}
