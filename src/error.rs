// src/error.rs

use thiserror::Error;

/// Result type for strict matching.
pub type Result<T> = core::result::Result<T, MatchError>;

/// Failures that a strict match surfaces and a lenient match logs and skips.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The query term is not a valid pattern.
    #[error("Invalid pattern for term '{term}': {source}")]
    InvalidPattern {
        term: String,
        #[source]
        source: fancy_regex::Error,
    },

    /// The pattern compiled but scanning the text failed (e.g. backtrack limit hit).
    #[error("Scan failed for term '{term}': {source}")]
    Scan {
        term: String,
        #[source]
        source: fancy_regex::Error,
    },
}

impl MatchError {
    pub fn term(&self) -> &str {
        match self {
            Self::InvalidPattern { term, .. } | Self::Scan { term, .. } => term,
        }
    }
}
