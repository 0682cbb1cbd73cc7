//! Error types for PhishGuard

/// Result type alias using PhishGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for PhishGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No model file exists at the configured path
    #[error("model file not found: {path}")]
    ModelNotFound { path: String },

    /// Model file exists but cannot be reconstructed into a usable artifact
    #[error("model deserialization error: {0}")]
    ModelDeserialize(String),

    /// Classifier-internal failure during prediction
    #[error("inference error: {0}")]
    Inference(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new model-not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::ModelNotFound { path: path.into() }
    }

    /// Create a new model deserialization error
    pub fn deserialize(msg: impl Into<String>) -> Self {
        Self::ModelDeserialize(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }
}
