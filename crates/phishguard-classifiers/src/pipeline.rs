//! The deserializable classification pipeline artifact
//!
//! The on-disk artifact is a declarative `PipelineSpec` that gets validated
//! and compiled into a ready-to-use `UrlPipeline`: a regex tokenizer, a
//! token-count vectorizer over a fixed vocabulary, and a binary logistic
//! regression decision function.

use crate::classifier::UrlClassifier;
use async_trait::async_trait;
use phishguard_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serde data model of the on-disk artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Model name/identifier
    #[serde(default = "default_name")]
    pub name: String,

    /// Regex source for the tokenizer
    pub token_pattern: String,

    /// Lowercase tokens before vocabulary lookup
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Token to coefficient column
    pub vocabulary: HashMap<String, usize>,

    /// One coefficient per vocabulary column
    pub coefficients: Vec<f64>,

    /// Decision function intercept
    pub intercept: f64,

    /// Ordered class labels; the second label wins on a positive decision
    pub classes: Vec<String>,
}

fn default_name() -> String {
    "url-pipeline".to_string()
}

fn default_lowercase() -> bool {
    true
}

/// Compiled, ready-to-use classification pipeline
pub struct UrlPipeline {
    spec: PipelineSpec,
    tokenizer: Regex,
}

impl UrlPipeline {
    /// Validate and compile a spec into a usable pipeline.
    ///
    /// Every violation is a deserialization error: the file was readable but
    /// does not reconstruct into a usable artifact.
    pub fn from_spec(spec: PipelineSpec) -> Result<Self> {
        let tokenizer = Regex::new(&spec.token_pattern)
            .map_err(|e| Error::deserialize(format!("invalid token pattern: {e}")))?;

        if spec.coefficients.len() != spec.vocabulary.len() {
            return Err(Error::deserialize(format!(
                "coefficient count {} does not match vocabulary size {}",
                spec.coefficients.len(),
                spec.vocabulary.len()
            )));
        }

        if spec.classes.len() < 2 {
            return Err(Error::deserialize(format!(
                "expected at least two classes, got {}",
                spec.classes.len()
            )));
        }

        if let Some((token, column)) = spec
            .vocabulary
            .iter()
            .find(|(_, column)| **column >= spec.coefficients.len())
        {
            return Err(Error::deserialize(format!(
                "vocabulary token {token:?} maps to column {column}, out of range"
            )));
        }

        Ok(Self { spec, tokenizer })
    }

    /// Model name from the artifact
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Ordered class labels
    pub fn classes(&self) -> &[String] {
        &self.spec.classes
    }

    /// Number of vocabulary columns
    pub fn vocabulary_size(&self) -> usize {
        self.spec.vocabulary.len()
    }

    fn label_for(&self, text: &str) -> String {
        let mut decision = self.spec.intercept;
        for token in self.tokenizer.find_iter(text) {
            let token = if self.spec.lowercase {
                token.as_str().to_lowercase()
            } else {
                token.as_str().to_string()
            };
            // Out-of-vocabulary tokens contribute nothing.
            if let Some(&column) = self.spec.vocabulary.get(&token) {
                decision += self.spec.coefficients[column];
            }
        }

        let index = usize::from(decision > 0.0);
        self.spec.classes[index].clone()
    }
}

#[async_trait]
impl UrlClassifier for UrlPipeline {
    async fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        Ok(texts.iter().map(|text| self.label_for(text)).collect())
    }

    fn name(&self) -> &str {
        &self.spec.name
    }
}
