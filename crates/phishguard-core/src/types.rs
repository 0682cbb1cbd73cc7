//! Core types for PhishGuard

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display label for a benign URL
pub const LABEL_GOOD: &str = "Good";

/// Display label for a phishing URL
pub const LABEL_BAD: &str = "Bad";

/// The two-class outcome of a URL check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Legitimate site
    Good,
    /// Likely phishing site
    Bad,
}

impl Verdict {
    /// Normalize a raw classifier label into a verdict.
    ///
    /// The comparison is case-insensitive against the literal `"good"`;
    /// every other label, including unexpected third labels, maps to `Bad`.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("good") {
            Self::Good
        } else {
            Self::Bad
        }
    }

    /// Display label for this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => LABEL_GOOD,
            Self::Bad => LABEL_BAD,
        }
    }
}

/// Labeled-confidence output of one prediction request.
///
/// Serializes as a flat JSON object mapping label names to values in [0,1].
/// Verdict maps carry exactly the two class labels; error states instead
/// carry a single human-readable key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfidenceMap(BTreeMap<String, f64>);

impl ConfidenceMap {
    /// Build the two-class map for a verdict.
    ///
    /// The artifact produces hard labels, so confidence is always binary:
    /// `{"Good": 1.0, "Bad": 0.0}` or `{"Bad": 1.0, "Good": 0.0}`.
    pub fn from_verdict(verdict: Verdict) -> Self {
        let (good, bad) = match verdict {
            Verdict::Good => (1.0, 0.0),
            Verdict::Bad => (0.0, 1.0),
        };
        let mut entries = BTreeMap::new();
        entries.insert(LABEL_GOOD.to_string(), good);
        entries.insert(LABEL_BAD.to_string(), bad);
        Self(entries)
    }

    /// The distinguished response for empty or whitespace-only input
    pub fn empty_input() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("Error".to_string(), 1.0);
        entries.insert("Info".to_string(), 0.0);
        Self(entries)
    }

    /// A single-key error map carrying a failure description
    pub fn failure(description: impl AsRef<str>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(format!("Error: {}", description.as_ref()), 1.0);
        Self(entries)
    }

    /// Look up the confidence for a label
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Number of entries in the map
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over label/confidence pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Whether this map carries a verdict rather than an error state
    pub fn is_verdict(&self) -> bool {
        self.0.len() == 2 && self.0.contains_key(LABEL_GOOD) && self.0.contains_key(LABEL_BAD)
    }
}
