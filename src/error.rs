//! Crate error types.

use thiserror::Error;

/// Errors raised while loading result summaries
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    #[error("{path}:{line}: record has {found} fields, column '{column}' needs {expected}")]
    ShortRecord {
        path: String,
        line: usize,
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: invalid numeric value '{value}' in column '{column}'")]
    Numeric {
        path: String,
        line: usize,
        column: String,
        value: String,
    },
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, Error>;
