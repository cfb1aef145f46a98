//! Tests for the prediction pipeline.

use super::*;
use crate::record::FeatureVector;
use crate::schema::FeatureSlot;
use std::sync::atomic::{AtomicUsize, Ordering};

fn age_overtime_schema() -> FeatureSchema {
    FeatureSchema::new(vec![
        FeatureSlot::continuous("Age"),
        FeatureSlot::categorical("OverTime"),
    ])
    .expect("valid slots")
}

/// Stub model returning a fixed probability and counting invocations.
struct StubModel {
    probability: f32,
    calls: AtomicUsize,
}

impl StubModel {
    fn returning(probability: f32) -> Self {
        Self {
            probability,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ScoringModel for StubModel {
    fn predict_probability(&self, _record: &FeatureVector) -> crate::error::Result<f32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.probability)
    }
}

/// Stub model that always fails internally.
struct FailingModel;

impl ScoringModel for FailingModel {
    fn predict_probability(&self, _record: &FeatureVector) -> crate::error::Result<f32> {
        Err("internal numeric error".into())
    }
}

#[test]
fn test_predict_success_returns_raw_probability() {
    let schema = age_overtime_schema();
    let model = StubModel::returning(0.75);
    let inputs = RawInputs::from([
        ("Age".to_string(), 34.0.into()),
        ("OverTime".to_string(), "1".into()),
    ]);

    let p = predict_probability(&inputs, &schema, &model).expect("valid inputs");
    assert_eq!(p, 0.75);
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_validation_failure_skips_model() {
    let schema = age_overtime_schema();
    let model = StubModel::returning(0.75);
    let inputs = RawInputs::from([("Age".to_string(), 34.0.into())]);

    let err = predict_probability(&inputs, &schema, &model).expect_err("missing field");
    assert!(err.is_validation());
    assert_eq!(model.calls.load(Ordering::SeqCst), 0, "model must not run");
}

#[test]
fn test_invalid_type_skips_model() {
    let schema = age_overtime_schema();
    let model = StubModel::returning(0.75);
    let inputs = RawInputs::from([
        ("Age".to_string(), "thirty".into()),
        ("OverTime".to_string(), "0".into()),
    ]);

    let err = predict_probability(&inputs, &schema, &model).expect_err("bad Age");
    assert!(matches!(err, PredecirError::InvalidType { field, .. } if field == "Age"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_model_failure_is_typed() {
    let schema = age_overtime_schema();
    let inputs = RawInputs::from([
        ("Age".to_string(), 34.0.into()),
        ("OverTime".to_string(), "1".into()),
    ]);

    let err = predict_probability(&inputs, &schema, &FailingModel).expect_err("model fails");
    match err {
        PredecirError::ModelFailure { message } => {
            assert!(message.contains("internal numeric error"));
        }
        other => panic!("expected ModelFailure, got {other:?}"),
    }
}

#[test]
fn test_dimension_mismatch_surfaces_as_model_failure() {
    // Schema with two slots paired with a one-coefficient scorer: the record
    // is well-formed against the schema, so the failure belongs to the model.
    let schema = age_overtime_schema();
    let scorer = LogisticScorer::new(vec![1.0], 0.0);
    let inputs = RawInputs::from([
        ("Age".to_string(), 34.0.into()),
        ("OverTime".to_string(), "1".into()),
    ]);

    let err = predict_probability(&inputs, &schema, &scorer).expect_err("mismatch");
    assert!(matches!(err, PredecirError::ModelFailure { .. }));
}

#[test]
fn test_format_probability() {
    assert_eq!(format_probability(0.75), "75.00%");
    assert_eq!(format_probability(0.2345), "23.45%");
    assert_eq!(format_probability(0.0), "0.00%");
    assert_eq!(format_probability(1.0), "100.00%");
}

#[test]
fn test_predictor_predict_formatted() {
    let predictor = Predictor::new(age_overtime_schema(), Arc::new(StubModel::returning(0.75)));
    let inputs = RawInputs::from([
        ("Age".to_string(), 34.0.into()),
        ("OverTime".to_string(), "1".into()),
    ]);

    let formatted = predictor.predict_formatted(&inputs).expect("valid inputs");
    assert_eq!(formatted, "75.00%");
}

#[test]
fn test_predictor_error_has_readable_message() {
    let predictor = Predictor::new(age_overtime_schema(), Arc::new(StubModel::returning(0.5)));
    let inputs = RawInputs::from([("Age".to_string(), 34.0.into())]);

    let err = predictor.predict_formatted(&inputs).expect_err("missing field");
    assert_eq!(err.to_string(), "Missing required field: OverTime");
}

#[test]
fn test_predictor_from_scorer_pair() {
    let schema = age_overtime_schema();
    let scorer = LogisticScorer::new(vec![0.0, 0.0], 0.0);
    let predictor = Predictor::from((schema, scorer));

    let inputs = RawInputs::from([
        ("Age".to_string(), 34.0.into()),
        ("OverTime".to_string(), "0".into()),
    ]);
    let p = predictor.predict(&inputs).expect("valid inputs");
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn test_predictor_shared_across_threads() {
    let predictor = Predictor::new(age_overtime_schema(), Arc::new(StubModel::returning(0.33)));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let p = predictor.clone();
            std::thread::spawn(move || {
                let inputs = RawInputs::from([
                    ("Age".to_string(), (20.0 + i as f64).into()),
                    ("OverTime".to_string(), "1".into()),
                ]);
                p.predict(&inputs).expect("valid inputs")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread"), 0.33);
    }
}
