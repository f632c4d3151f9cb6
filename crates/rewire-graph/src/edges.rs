use rewire_core::errors::{ErrorInfo, RewireError};
use rewire_core::{AdjacencyMatrix, VertexId};
use serde::{Deserialize, Serialize};

/// Undirected edge stored as an ordered pair of endpoints.
///
/// At extraction time `u > v` (strict lower triangle); swaps may store either
/// orientation afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
}

impl Edge {
    /// Creates an edge from its endpoints.
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }

    /// Endpoints ordered as `(max, min)`, i.e. the lower-triangle position.
    pub fn lower(&self) -> (VertexId, VertexId) {
        (self.u.max(self.v), self.u.min(self.v))
    }
}

/// Stable-indexed list of the undirected edges of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Number of edges (`Ne`).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge stored at `index`.
    pub fn get(&self, index: usize) -> Option<Edge> {
        self.edges.get(index).copied()
    }

    /// Iterates over the edges in index order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Slice view of the edges.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub(crate) fn replace(&mut self, index: usize, edge: Edge) {
        self.edges[index] = edge;
    }
}

/// Mutable output matrix paired with its edge index.
///
/// Both halves are created together by [`extract_edges`] and only ever
/// mutated together by the rewiring engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingGraph {
    matrix: AdjacencyMatrix,
    edges: EdgeList,
}

impl WorkingGraph {
    /// Current weights.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Current edge index.
    pub fn edges(&self) -> &EdgeList {
        &self.edges
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.matrix.rows()
    }

    /// Splits the working graph into its matrix and edge list.
    pub fn into_parts(self) -> (AdjacencyMatrix, EdgeList) {
        (self.matrix, self.edges)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut AdjacencyMatrix, &mut EdgeList) {
        (&mut self.matrix, &mut self.edges)
    }

    /// Checks that the edge list is the exact inverse index of the nonzero
    /// lower-triangle entries of the matrix.
    pub fn verify_index(&self) -> Result<(), RewireError> {
        let n = self.matrix.rows();
        let mut seen = vec![false; n * n];
        for (index, edge) in self.edges.iter().enumerate() {
            let (i, j) = edge.lower();
            if i >= n || i == j {
                return Err(index_error("invalid-edge", "edge is out of range or a self-loop")
                    .with_index(index, edge));
            }
            if self.matrix[(i, j)] == 0.0 {
                return Err(index_error("missing-weight", "indexed edge has zero weight")
                    .with_index(index, edge));
            }
            if self.matrix[(i, j)].to_bits() != self.matrix[(j, i)].to_bits() {
                return Err(index_error("asymmetric-edge", "edge weight is not symmetric")
                    .with_index(index, edge));
            }
            if std::mem::replace(&mut seen[i * n + j], true) {
                return Err(index_error("duplicate-edge", "edge is indexed twice")
                    .with_index(index, edge));
            }
        }
        for i in 0..n {
            for j in 0..i {
                if self.matrix[(i, j)] != 0.0 && !seen[i * n + j] {
                    return Err(RewireError::Graph(
                        ErrorInfo::new("unindexed-edge", "matrix edge missing from the edge list")
                            .with_context("i", i.to_string())
                            .with_context("j", j.to_string()),
                    ));
                }
            }
        }
        Ok(())
    }
}

struct IndexError(ErrorInfo);

fn index_error(code: &str, message: &str) -> IndexError {
    IndexError(ErrorInfo::new(code, message))
}

impl IndexError {
    fn with_index(self, index: usize, edge: Edge) -> RewireError {
        RewireError::Graph(
            self.0
                .with_context("index", index.to_string())
                .with_context("u", edge.u.to_string())
                .with_context("v", edge.v.to_string()),
        )
    }
}

/// Materializes the edge list and a symmetric working copy of `graph`.
///
/// Only the strict lower triangle is read: the diagonal is ignored and the
/// upper triangle is rebuilt by symmetry.
pub fn extract_edges(graph: &AdjacencyMatrix) -> Result<WorkingGraph, RewireError> {
    let n = graph.ensure_square()?;
    let mut matrix = AdjacencyMatrix::zeros(n);
    let mut edges = EdgeList::default();
    for i in 0..n {
        for j in 0..i {
            let weight = graph[(i, j)];
            if weight != 0.0 {
                edges.push(Edge::new(i, j));
                matrix[(i, j)] = weight;
                matrix[(j, i)] = weight;
            }
        }
    }
    Ok(WorkingGraph { matrix, edges })
}
