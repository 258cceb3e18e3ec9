//! Error types for documentation loading and parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing the data documentation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocsError {
    // === Source Errors ===
    /// Documentation file not found.
    #[error("documentation file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the documentation file.
    #[error("failed to read documentation {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Grammar Errors ===
    /// A code line appeared while no label variable was open.
    #[error("line {line_number}: code line without an open label variable: {line:?}")]
    OrphanRealization { line_number: usize, line: String },

    /// A variable line declared a type outside the four documented types.
    #[error("line {line_number}: unknown variable type '{tag}': {line:?}")]
    UnknownType {
        line_number: usize,
        tag: String,
        line: String,
    },

    /// A line matched neither the variable nor the code grammar.
    #[error("line {line_number}: {reason}: {line:?}")]
    MalformedLine {
        line_number: usize,
        reason: &'static str,
        line: String,
    },
}

impl DocsError {
    /// 1-based line number for grammar errors.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::OrphanRealization { line_number, .. }
            | Self::UnknownType { line_number, .. }
            | Self::MalformedLine { line_number, .. } => Some(*line_number),
            Self::FileNotFound { .. } | Self::FileRead { .. } => None,
        }
    }
}

/// Result type for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;
