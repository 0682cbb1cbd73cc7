//! One-shot loading of the serialized pipeline artifact

use crate::pipeline::{PipelineSpec, UrlPipeline};
use phishguard_core::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Load and compile the pipeline artifact at `path`.
///
/// A missing file and an undecodable file surface as distinct errors so
/// callers can report them apart. A load failure is not fatal to startup:
/// the caller keeps running with no artifact and every later request
/// reports the absence instead of crashing.
pub fn load_pipeline(path: impl AsRef<Path>) -> Result<UrlPipeline> {
    let path = path.as_ref();
    let result = read_pipeline(path);

    match &result {
        Ok(pipeline) => info!(
            model = pipeline.name(),
            path = %path.display(),
            vocabulary = pipeline.vocabulary_size(),
            "model loaded"
        ),
        Err(err) => error!(path = %path.display(), %err, "model load failed"),
    }

    result
}

fn read_pipeline(path: &Path) -> Result<UrlPipeline> {
    if !path.exists() {
        return Err(Error::not_found(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| Error::deserialize(format!("unreadable model file: {e}")))?;
    let spec: PipelineSpec = serde_json::from_str(&raw)
        .map_err(|e| Error::deserialize(format!("undecodable model file: {e}")))?;

    UrlPipeline::from_spec(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_spec_json() -> String {
        serde_json::json!({
            "name": "phishing-logreg",
            "token_pattern": "[A-Za-z]+",
            "lowercase": true,
            "vocabulary": { "youtube": 0, "login": 1 },
            "coefficients": [1.5, -2.0],
            "intercept": 0.1,
            "classes": ["bad", "good"]
        })
        .to_string()
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_pipeline(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::ModelNotFound { .. }));
    }

    #[test]
    fn garbage_file_is_deserialize_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a pipeline").unwrap();

        let err = load_pipeline(file.path()).unwrap_err();
        assert!(matches!(err, Error::ModelDeserialize(_)));
    }

    #[test]
    fn structurally_invalid_spec_is_deserialize_error() {
        // Decodes as JSON but the coefficient count is wrong.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let doc = serde_json::json!({
            "token_pattern": "[A-Za-z]+",
            "vocabulary": { "youtube": 0, "login": 1 },
            "coefficients": [1.5],
            "intercept": 0.1,
            "classes": ["bad", "good"]
        });
        file.write_all(doc.to_string().as_bytes()).unwrap();

        let err = load_pipeline(file.path()).unwrap_err();
        assert!(matches!(err, Error::ModelDeserialize(_)));
    }

    #[test]
    fn valid_artifact_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(valid_spec_json().as_bytes()).unwrap();

        let pipeline = load_pipeline(file.path()).unwrap();
        assert_eq!(pipeline.name(), "phishing-logreg");
        assert_eq!(pipeline.classes(), ["bad", "good"]);
        assert_eq!(pipeline.vocabulary_size(), 2);
    }
}
