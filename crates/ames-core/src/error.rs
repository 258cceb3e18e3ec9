//! Error type for the end-to-end catalog operations.

use thiserror::Error;

/// Errors raised by [`bootstrap`](crate::bootstrap) and
/// [`load_clean_data`](crate::load_clean_data).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    // =========================================================================
    // WRAPPED ERRORS
    // =========================================================================
    /// Documentation reading or parsing error.
    #[error("Documentation error: {0}")]
    Docs(#[from] ames_docs::DocsError),

    /// Raw dataset reading error.
    #[error("Ingest error: {0}")]
    Ingest(#[from] ames_ingest::IngestError),

    /// Type cast error.
    #[error("Cast error: {0}")]
    Cast(#[from] ames_transform::CastError),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_display() {
        let err: CatalogError = ames_transform::CastError::ColumnNotFound("Lot Area".into()).into();
        assert_eq!(err.to_string(), "Cast error: Column not found: Lot Area");
    }
}
