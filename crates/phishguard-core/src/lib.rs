//! PhishGuard Core
//!
//! Core types and error handling shared across PhishGuard components.
//!
//! This crate provides:
//! - The two-class `Verdict` and the `ConfidenceMap` response shape
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ConfidenceMap, Verdict, LABEL_BAD, LABEL_GOOD};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ConfidenceMap, Verdict};
}
