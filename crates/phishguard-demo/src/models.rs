//! Shared demo data types

use chrono::{DateTime, Utc};
use phishguard_core::ConfidenceMap;
use serde::{Deserialize, Serialize};

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Path the model artifact is loaded from
    pub model_path: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model_path: "./models/phishing.json".to_string(),
        }
    }
}

/// Status of the model artifact, fixed at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelStatus {
    /// Artifact deserialized and ready
    Loaded {
        name: String,
        classes: Vec<String>,
        vocabulary_size: usize,
    },

    /// Artifact missing or undecodable; every request reports this instead
    Unavailable { error: String },
}

impl ModelStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// One handled prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Unique identifier for this check
    pub id: String,

    /// The raw input as submitted
    pub url: String,

    /// Labeled-confidence output
    pub scores: ConfidenceMap,

    /// Display label for verdict outcomes; absent for error responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Handler latency in milliseconds
    pub latency_ms: f64,

    /// When the request was handled
    pub timestamp: DateTime<Utc>,
}

/// Canned example inputs offered by the form
pub const EXAMPLE_URLS: [&str; 4] = [
    "youtube.com/",
    "yeniik.com.tr/wp-admin/js/login.alibaba.com/login.jsp.php",
    "google.com/search?q=weather",
    "paypal-servis-center.com/login",
];
