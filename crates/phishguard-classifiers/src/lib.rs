//! PhishGuard Classifiers
//!
//! The URL classification capability behind the demo:
//! - A narrow classifier trait the handler depends on
//! - The deserializable pipeline artifact (tokenizer, count vectorizer,
//!   logistic regression)
//! - The one-shot model loader
//! - The prediction handler that shapes every outcome into a `ConfidenceMap`

pub mod classifier;
pub mod loader;
pub mod pipeline;
pub mod predictor;

pub use classifier::UrlClassifier;
pub use loader::load_pipeline;
pub use pipeline::{PipelineSpec, UrlPipeline};
pub use predictor::{PredictError, UrlPredictor};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::UrlClassifier;
    pub use crate::loader::load_pipeline;
    pub use crate::pipeline::{PipelineSpec, UrlPipeline};
    pub use crate::predictor::{PredictError, UrlPredictor};
}
