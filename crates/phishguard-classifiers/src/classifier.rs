//! Classifier trait

use async_trait::async_trait;
use phishguard_core::Result;

/// Narrow capability interface over the classifier artifact.
///
/// The prediction handler only ever calls this, so the artifact's internals
/// stay opaque and a test double can stand in without touching handler logic.
#[async_trait]
pub trait UrlClassifier: Send + Sync {
    /// Classify a batch of raw texts.
    ///
    /// Returns one discrete label per input, in input order.
    async fn predict(&self, texts: &[String]) -> Result<Vec<String>>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
