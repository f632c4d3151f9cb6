#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rewire_core::{AdjacencyMatrix, Matrix};

/// Symmetric matrix on `n` vertices with the given weighted edges.
pub fn graph_from_edges(n: usize, edges: &[(usize, usize, f64)]) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::zeros(n);
    for &(a, b, weight) in edges {
        graph[(a, b)] = weight;
        graph[(b, a)] = weight;
    }
    graph
}

/// Path `0 - 1 - 2 - 3` with weights 1.0, 2.0, 3.0.
pub fn path4() -> AdjacencyMatrix {
    graph_from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)])
}

/// Constraint where every unordered vertex pair has its own value.
pub fn all_distinct_constraint(n: usize) -> Matrix<u64> {
    let mut constraint = Matrix::filled(n, n, 0u64);
    for i in 0..n {
        for j in 0..n {
            let (lo, hi) = (i.min(j), i.max(j));
            constraint[(i, j)] = (lo * n + hi) as u64;
        }
    }
    constraint
}

/// RNG that counts how many times it was sampled.
pub struct CountingRng {
    inner: StdRng,
    pub draws: usize,
}

impl CountingRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}
