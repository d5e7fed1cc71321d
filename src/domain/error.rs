// ============================================================
// Layer 3 — Preprocessing Errors
// ============================================================
// One error enum for everything below the application layer.
// The application layer wraps these in anyhow with context;
// the lower layers keep them typed so tests can match on them.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use std::{io, num::ParseFloatError};
use thiserror::Error;

/// Every way a preprocessing operation can fail.
#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("column '{name}' not found (available: {available})")]
    MissingColumn { name: String, available: String },

    #[error("column '{name}' has {actual} rows but the table has {expected}")]
    ColumnLength {
        name:     String,
        expected: usize,
        actual:   usize,
    },

    #[error("column '{name}' appears more than once in the header")]
    DuplicateColumn { name: String },

    #[error("{features} features but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("split percentile must be within 0..=100, got {0}")]
    InvalidPercentile(f64),

    #[error("paragraph length must be at least one word")]
    ZeroParagraphLength,

    #[error("cannot read '{path}'")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: '{value}' is not a number")]
    Parse {
        line:  usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("pattern matching failed: {0}")]
    Pattern(#[from] fancy_regex::Error),
}

impl PreprocessError {
    /// Build an Io error tagged with the path that failed
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
