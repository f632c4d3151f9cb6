use rewire_core::errors::{BudgetReport, ErrorInfo, RewireError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("rows", "3")
        .with_context("cols", "4")
}

#[test]
fn shape_error_surface() {
    let err = RewireError::Shape(sample_info("not-square", "matrix is not square"));
    assert_eq!(err.code(), "not-square");
    assert!(err.info().unwrap().context.contains_key("rows"));
    assert!(err.budget_report().is_none());
}

#[test]
fn argument_count_error_surface() {
    let err = RewireError::ArgumentCount(sample_info("too-many-inputs", "too many inputs"));
    assert_eq!(err.code(), "too-many-inputs");
}

#[test]
fn budget_error_carries_counters() {
    let report = BudgetReport {
        achieved: 3,
        required: 12,
        constraint_skipped: 40,
        attempts: 100,
        max_attempts: 100,
    };
    let err = RewireError::BudgetExhausted(report);
    assert_eq!(err.code(), "budget-exhausted");
    assert!(err.info().is_none());
    assert_eq!(err.budget_report(), Some(&report));
    let rendered = err.to_string();
    assert!(rendered.contains("3 / 12 rewires done"));
    assert!(rendered.contains("40 skipped due to constraints"));
}

#[test]
fn display_includes_context_and_hint() {
    let info = sample_info("constraint-shape", "constraint shape mismatch").with_hint("resize it");
    let rendered = info.to_string();
    assert!(rendered.starts_with("constraint shape mismatch (code: constraint-shape)"));
    assert!(rendered.contains("cols=4, rows=3"));
    assert!(rendered.ends_with("| hint: resize it"));
}

#[test]
fn errors_roundtrip_through_json() {
    let errors = vec![
        RewireError::Config(sample_info("zero-replicas", "replicas must be positive")),
        RewireError::BudgetExhausted(BudgetReport {
            achieved: 0,
            required: 4,
            constraint_skipped: 0,
            attempts: 10,
            max_attempts: 10,
        }),
    ];
    for err in errors {
        let json = serde_json::to_string(&err).unwrap();
        let back: RewireError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
