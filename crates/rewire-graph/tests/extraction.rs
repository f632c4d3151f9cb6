mod common;

use rewire_core::{AdjacencyMatrix, Matrix, RewireError};
use rewire_graph::{extract_edges, Edge};

use common::{graph_from_edges, path4};

#[test]
fn path_graph_edges_come_from_the_lower_triangle() {
    let graph = path4();
    let working = extract_edges(&graph).unwrap();
    let edges: Vec<Edge> = working.edges().iter().collect();
    assert_eq!(
        edges,
        vec![Edge::new(1, 0), Edge::new(2, 1), Edge::new(3, 2)]
    );
    assert_eq!(working.matrix(), &graph);
    assert_eq!(working.num_vertices(), 4);
    working.verify_index().unwrap();
}

#[test]
fn extraction_is_idempotent() {
    let graph = graph_from_edges(5, &[(0, 4, -1.5), (1, 3, 2.0), (2, 4, 0.25)]);
    let first = extract_edges(&graph).unwrap();
    let second = extract_edges(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn diagonal_entries_are_dropped() {
    let mut graph = graph_from_edges(3, &[(0, 1, 1.0)]);
    graph[(2, 2)] = 9.0;
    let working = extract_edges(&graph).unwrap();
    assert_eq!(working.edges().len(), 1);
    assert_eq!(working.matrix()[(2, 2)], 0.0);
}

#[test]
fn lower_triangle_is_authoritative_for_asymmetric_input() {
    let mut graph = AdjacencyMatrix::zeros(3);
    graph[(2, 0)] = 4.0;
    graph[(0, 1)] = 7.0;
    let working = extract_edges(&graph).unwrap();
    assert_eq!(working.edges().as_slice(), &[Edge::new(2, 0)]);
    assert_eq!(working.matrix()[(0, 2)], 4.0);
    assert_eq!(working.matrix()[(0, 1)], 0.0);
}

#[test]
fn negative_and_nan_weights_are_edges() {
    let graph = graph_from_edges(3, &[(0, 1, -2.0), (1, 2, f64::NAN)]);
    let working = extract_edges(&graph).unwrap();
    assert_eq!(working.edges().len(), 2);
    assert!(working.matrix()[(2, 1)].is_nan());
    working.verify_index().unwrap();
}

#[test]
fn non_square_matrix_is_rejected() {
    let graph = Matrix::filled(3, 4, 0.0);
    match extract_edges(&graph).unwrap_err() {
        RewireError::Shape(info) => assert_eq!(info.code, "not-square"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_graph_has_no_edges() {
    let working = extract_edges(&AdjacencyMatrix::zeros(0)).unwrap();
    assert!(working.edges().is_empty());
    let (matrix, edges) = working.into_parts();
    assert_eq!(matrix.shape(), (0, 0));
    assert!(edges.is_empty());
}
