//! Mock classifiers for testing
//!
//! Configurable stand-ins for the `UrlClassifier` trait, for exercising the
//! prediction handler without a real artifact.

use async_trait::async_trait;
use phishguard_classifiers::UrlClassifier;
use phishguard_core::{Error, Result};
use std::sync::atomic::{AtomicU32, Ordering};

/// A classifier that returns a fixed label for every input
pub struct StubClassifier {
    name: String,
    label: String,
    call_count: AtomicU32,
}

impl StubClassifier {
    /// Create a new stub returning `"good"` for everything
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: "good".to_string(),
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the label this classifier will return
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UrlClassifier for StubClassifier {
    async fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(texts.iter().map(|_| self.label.clone()).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that always fails, for testing error paths
pub struct FailingClassifier {
    name: String,
    error_message: String,
}

impl FailingClassifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error_message: "simulated classifier failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

#[async_trait]
impl UrlClassifier for FailingClassifier {
    async fn predict(&self, _texts: &[String]) -> Result<Vec<String>> {
        Err(Error::inference(self.error_message.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that returns no labels at all, for the malformed-batch path
pub struct SilentClassifier {
    name: String,
}

impl SilentClassifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl UrlClassifier for SilentClassifier {
    async fn predict(&self, _texts: &[String]) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_returns_configured_label_per_input() {
        let stub = StubClassifier::new("stub").with_label("bad");

        let labels = stub
            .predict(&["a.com".to_string(), "b.com".to_string()])
            .await
            .unwrap();

        assert_eq!(labels, vec!["bad", "bad"]);
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn failing_classifier_errors() {
        let failing = FailingClassifier::new("fail").with_error("boom");

        let err = failing.predict(&["a.com".to_string()]).await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
