//! Prediction handler contract tests
//!
//! These verify the request boundary against test doubles: guard order,
//! label normalization, error containment, and the fixed response shapes.

use phishguard_classifiers::{PredictError, UrlClassifier, UrlPredictor};
use phishguard_core::ConfidenceMap;
use std::sync::Arc;

#[path = "mock_classifiers.rs"]
mod mock_classifiers;

use mock_classifiers::{FailingClassifier, SilentClassifier, StubClassifier};

fn predictor_with(classifier: Arc<dyn UrlClassifier>) -> UrlPredictor {
    UrlPredictor::new(Some(classifier))
}

#[tokio::test]
async fn good_label_in_any_case_maps_to_good() {
    for label in ["good", "GOOD", "GoOd"] {
        let predictor = predictor_with(Arc::new(StubClassifier::new("stub").with_label(label)));

        let scores = predictor.predict("youtube.com/").await;
        assert_eq!(scores.get("Good"), Some(1.0));
        assert_eq!(scores.get("Bad"), Some(0.0));
    }
}

#[tokio::test]
async fn any_other_label_maps_to_bad() {
    for label in ["bad", "BAD", "suspicious", "unknown-third-class"] {
        let predictor = predictor_with(Arc::new(StubClassifier::new("stub").with_label(label)));

        let scores = predictor.predict("paypal-servis-center.com/login").await;
        assert_eq!(scores.get("Bad"), Some(1.0));
        assert_eq!(scores.get("Good"), Some(0.0));
    }
}

#[tokio::test]
async fn empty_input_short_circuits_before_the_classifier() {
    let stub = Arc::new(StubClassifier::new("stub"));
    let predictor = predictor_with(stub.clone());

    for input in ["", "   ", "\t\n "] {
        let scores = predictor.predict(input).await;
        assert_eq!(scores, ConfidenceMap::empty_input());
    }

    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn unavailable_model_reports_without_inference() {
    let predictor = UrlPredictor::new(None);

    let scores = predictor.predict("youtube.com/").await;
    assert_eq!(scores, ConfidenceMap::failure("model not loaded"));
    assert!(!predictor.is_ready());
}

#[tokio::test]
async fn unavailable_model_takes_precedence_over_empty_input() {
    let predictor = UrlPredictor::new(None);

    let outcome = predictor.classify("").await;
    assert_eq!(outcome, Err(PredictError::ModelUnavailable));
}

#[tokio::test]
async fn inference_failure_is_contained_in_a_single_key_map() {
    let predictor = predictor_with(Arc::new(
        FailingClassifier::new("fail").with_error("tensor shape mismatch"),
    ));

    let scores = predictor.predict("youtube.com/").await;
    assert_eq!(scores.len(), 1);

    let (key, value) = scores.iter().next().unwrap();
    assert!(key.starts_with("Error: "));
    assert!(key.contains("tensor shape mismatch"));
    assert_eq!(value, 1.0);
}

#[tokio::test]
async fn empty_label_batch_is_an_inference_failure() {
    let predictor = predictor_with(Arc::new(SilentClassifier::new("silent")));

    let outcome = predictor.classify("youtube.com/").await;
    assert_eq!(
        outcome,
        Err(PredictError::Inference(
            "classifier returned no label".to_string()
        ))
    );

    let scores = predictor.predict("youtube.com/").await;
    assert_eq!(scores.len(), 1);
}

#[tokio::test]
async fn predict_is_idempotent() {
    let predictor = predictor_with(Arc::new(StubClassifier::new("stub").with_label("bad")));

    let first = predictor.predict("paypal-servis-center.com/login").await;
    let second = predictor.predict("paypal-servis-center.com/login").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn example_scenarios() {
    let good = predictor_with(Arc::new(StubClassifier::new("stub").with_label("good")));
    let scores = good.predict("youtube.com/").await;
    assert_eq!(scores.get("Good"), Some(1.0));
    assert_eq!(scores.get("Bad"), Some(0.0));

    let bad = predictor_with(Arc::new(StubClassifier::new("stub").with_label("bad")));
    let scores = bad.predict("paypal-servis-center.com/login").await;
    assert_eq!(scores.get("Bad"), Some(1.0));
    assert_eq!(scores.get("Good"), Some(0.0));
}
