//! Raw dataset ingestion for the Ames housing data.
//!
//! The dataset is loaded into a Polars [`DataFrame`](polars::prelude::DataFrame)
//! with every column as text; typing is left to the schema-driven caster.
//!
//! ```ignore
//! use std::path::Path;
//! use ames_ingest::read_raw_table;
//!
//! let raw = read_raw_table(Path::new("data/data_clean.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    RawTableOptions, column_names, read_raw_table, read_raw_table_with, validate_encoding,
};
