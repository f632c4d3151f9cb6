mod common;

use rewire_core::{Matrix, RewireError, RngHandle};
use rewire_graph::host::{invoke, HostValue};
use rewire_graph::{compare_null_model, ring_graph, rewire_with, NoopObserver, RewireLimits};

use common::CountingRng;

fn graph_input() -> HostValue {
    HostValue::Matrix(ring_graph(6))
}

#[test]
fn two_inputs_rewire_the_graph() {
    let mut rng = RngHandle::from_seed(12);
    let out = invoke(
        &[graph_input(), HostValue::Scalar(2.0)],
        &RewireLimits::default(),
        &mut rng,
    )
    .unwrap();
    assert!(compare_null_model(&ring_graph(6), &out).is_valid());
}

#[test]
fn too_many_inputs_are_rejected_before_sampling() {
    let mut rng = CountingRng::new(0);
    let inputs = vec![
        graph_input(),
        HostValue::Scalar(1.0),
        graph_input(),
        HostValue::Scalar(0.0),
    ];
    let err = invoke(&inputs, &RewireLimits::default(), &mut rng).unwrap_err();
    match err {
        RewireError::ArgumentCount(info) => {
            assert_eq!(info.code, "input-count");
            assert_eq!(info.context.get("supplied"), Some(&"4".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(rng.draws, 0);
}

#[test]
fn too_few_inputs_are_rejected() {
    let mut rng = CountingRng::new(0);
    let err = invoke(&[graph_input()], &RewireLimits::default(), &mut rng).unwrap_err();
    assert!(matches!(err, RewireError::ArgumentCount(_)));
}

#[test]
fn inputs_must_have_the_right_kind() {
    let mut rng = CountingRng::new(0);
    let err = invoke(
        &[HostValue::Scalar(1.0), HostValue::Scalar(1.0)],
        &RewireLimits::default(),
        &mut rng,
    )
    .unwrap_err();
    match err {
        RewireError::ArgumentType(info) => {
            assert_eq!(info.code, "input-type");
            assert_eq!(info.context.get("position"), Some(&"0".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = invoke(
        &[graph_input(), HostValue::Matrix(ring_graph(3))],
        &RewireLimits::default(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.code(), "input-type");
    assert_eq!(rng.draws, 0);
}

#[test]
fn negative_or_non_finite_counts_are_rejected() {
    let mut rng = CountingRng::new(0);
    for raw in [-1.0, f64::NAN, f64::INFINITY] {
        let err = invoke(
            &[graph_input(), HostValue::Scalar(raw)],
            &RewireLimits::default(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err.code(), "invalid-count");
    }
}

#[test]
fn fractional_counts_truncate_and_one_by_one_matrices_count_as_scalars() {
    let limits = RewireLimits::default();
    let expected = rewire_with::<f64, _, _>(
        &ring_graph(6),
        1,
        None,
        &limits,
        &mut RngHandle::from_seed(3),
        &mut NoopObserver,
    )
    .unwrap()
    .graph;

    let scalar = invoke(
        &[graph_input(), HostValue::Scalar(1.7)],
        &limits,
        &mut RngHandle::from_seed(3),
    )
    .unwrap();
    let boxed = invoke(
        &[
            graph_input(),
            HostValue::Matrix(Matrix::from_rows(vec![vec![1.0]]).unwrap()),
        ],
        &limits,
        &mut RngHandle::from_seed(3),
    )
    .unwrap();
    assert_eq!(scalar, expected);
    assert_eq!(boxed, expected);
}

#[test]
fn shape_errors_come_from_the_graph_and_the_constraint() {
    let mut rng = CountingRng::new(0);
    let err = invoke(
        &[HostValue::Matrix(Matrix::filled(3, 4, 0.0)), HostValue::Scalar(1.0)],
        &RewireLimits::default(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.code(), "not-square");

    let err = invoke(
        &[
            graph_input(),
            HostValue::Scalar(1.0),
            HostValue::Matrix(Matrix::zeros(5)),
        ],
        &RewireLimits::default(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.code(), "constraint-shape");
    assert_eq!(rng.draws, 0);
}

#[test]
fn constraint_input_is_applied() {
    let constraint = Matrix::filled(6, 6, 0.5);
    let limits = RewireLimits::default();
    let via_host = invoke(
        &[
            graph_input(),
            HostValue::Scalar(1.0),
            HostValue::Matrix(constraint.clone()),
        ],
        &limits,
        &mut RngHandle::from_seed(10),
    )
    .unwrap();
    let direct = rewire_with(
        &ring_graph(6),
        1,
        Some(&constraint),
        &limits,
        &mut RngHandle::from_seed(10),
        &mut NoopObserver,
    )
    .unwrap()
    .graph;
    assert_eq!(via_host, direct);
}
