//! The prediction request handler

use crate::classifier::UrlClassifier;
use crate::pipeline::UrlPipeline;
use phishguard_core::{ConfidenceMap, Verdict};
use std::sync::Arc;

/// Failure modes of one prediction request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The artifact failed to load at startup
    #[error("model not loaded")]
    ModelUnavailable,

    /// The request contains no meaningful text
    #[error("empty input")]
    EmptyInput,

    /// The classifier failed during prediction
    #[error("{0}")]
    Inference(String),
}

/// Stateless prediction handler over an optionally-loaded classifier.
///
/// The handler owns the loader's result explicitly instead of reading a
/// process-wide global; the unavailable condition is a constructor-time
/// value that every request checks first.
pub struct UrlPredictor {
    classifier: Option<Arc<dyn UrlClassifier>>,
}

impl UrlPredictor {
    pub fn new(classifier: Option<Arc<dyn UrlClassifier>>) -> Self {
        Self { classifier }
    }

    /// Wrap a load result. The failure case was already reported by the
    /// loader; here it simply becomes the unavailable state.
    pub fn from_load(result: phishguard_core::Result<UrlPipeline>) -> Self {
        Self::new(
            result
                .ok()
                .map(|pipeline| Arc::new(pipeline) as Arc<dyn UrlClassifier>),
        )
    }

    /// Whether an artifact is available for inference
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// Name of the loaded classifier, if any
    pub fn classifier_name(&self) -> Option<&str> {
        self.classifier.as_deref().map(|classifier| classifier.name())
    }

    /// Run the guarded classification for one input.
    ///
    /// Guard order: unavailable model, then empty input, then inference.
    /// The classifier is never invoked for the first two.
    pub async fn classify(&self, input: &str) -> Result<Verdict, PredictError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(PredictError::ModelUnavailable)?;

        if input.trim().is_empty() {
            return Err(PredictError::EmptyInput);
        }

        let texts = [input.to_string()];
        let labels = classifier
            .predict(&texts)
            .await
            .map_err(|e| PredictError::Inference(e.to_string()))?;
        let label = labels
            .first()
            .ok_or_else(|| PredictError::Inference("classifier returned no label".to_string()))?;

        Ok(Verdict::from_label(label))
    }

    /// The composed request boundary: every path returns a well-formed map,
    /// nothing panics and nothing propagates.
    pub async fn predict(&self, input: &str) -> ConfidenceMap {
        match self.classify(input).await {
            Ok(verdict) => ConfidenceMap::from_verdict(verdict),
            Err(err) => ConfidenceMap::from(&err),
        }
    }
}

impl From<&PredictError> for ConfidenceMap {
    fn from(err: &PredictError) -> Self {
        match err {
            PredictError::EmptyInput => ConfidenceMap::empty_input(),
            PredictError::ModelUnavailable => ConfidenceMap::failure("model not loaded"),
            PredictError::Inference(msg) => ConfidenceMap::failure(msg),
        }
    }
}
