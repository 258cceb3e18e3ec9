//! Error types for schema-driven casting.

use thiserror::Error;

/// Errors that can occur while typing the raw dataset.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CastError {
    // === Value Errors ===
    /// A continuous or target cell is not a number.
    #[error("column '{column}': value {value:?} is not a number")]
    NotNumeric { column: String, value: String },

    /// A discrete cell is not an integer literal.
    #[error("column '{column}': value {value:?} is not an integer")]
    NotInteger { column: String, value: String },

    /// A label cell is not one of the documented codes.
    #[error("column '{column}': value {value:?} is not a documented code")]
    UnknownCategory { column: String, value: String },

    // === Frame Errors ===
    /// Column not found in the DataFrame.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
}

impl CastError {
    /// Column the error refers to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::NotNumeric { column, .. }
            | Self::NotInteger { column, .. }
            | Self::UnknownCategory { column, .. } => Some(column),
            Self::ColumnNotFound(column) => Some(column),
            Self::PolarsError(_) => None,
        }
    }
}

/// Result type for casting operations.
pub type Result<T> = std::result::Result<T, CastError>;
