//! Ames housing column catalog.
//!
//! Turns the published data documentation into a typed column catalog and
//! uses it to load the dataset with every column cast to its documented type.
//!
//! ```ignore
//! use ames_core::{bootstrap, load_clean_data};
//! use ames_docs::FileDocument;
//! use ames_model::CatalogConfig;
//! use ames_transform::CastOptions;
//!
//! let source = FileDocument::new("data/data_documentation.txt");
//! let mut catalog = bootstrap(&source, CatalogConfig::default())?;
//! let typed = load_clean_data("data/data_clean.csv", &mut catalog, &CastOptions::default())?;
//! ```

pub mod error;
pub mod logging;

use std::path::Path;

use ames_docs::{DocumentSource, MetadataParser};
use ames_ingest::{RawTableOptions, read_raw_table_with};
use ames_model::{Catalog, CatalogConfig};
use ames_transform::{CastOptions, TypedFrame, load_and_cast};

pub use error::{CatalogError, Result};

/// Builds an indexed catalog from the documentation.
///
/// The configuration's identifier and target columns are skipped by the
/// parser; the target list starts from the configured seed.
pub fn bootstrap(source: &impl DocumentSource, config: CatalogConfig) -> Result<Catalog> {
    let lines = source.lines()?;
    let schema = MetadataParser::from_config(&config).parse(&lines)?;
    let catalog = Catalog::new(schema, config);
    tracing::info!(
        columns = catalog.schema().len(),
        continuous = catalog.continuous().len(),
        discrete = catalog.discrete().len(),
        nominal = catalog.nominal().len(),
        ordinal = catalog.ordinal().len(),
        "Built column catalog"
    );
    Ok(catalog)
}

/// Reads a comma separated dataset and casts it through the catalog.
pub fn load_clean_data(
    path: impl AsRef<Path>,
    catalog: &mut Catalog,
    options: &CastOptions,
) -> Result<TypedFrame> {
    load_clean_data_with(path, catalog, options, &RawTableOptions::default())
}

/// Reads a dataset with explicit CSV options and casts it through the catalog.
pub fn load_clean_data_with(
    path: impl AsRef<Path>,
    catalog: &mut Catalog,
    options: &CastOptions,
    csv: &RawTableOptions,
) -> Result<TypedFrame> {
    let raw = read_raw_table_with(path.as_ref(), csv)?;
    Ok(load_and_cast(&raw, catalog, options)?)
}
