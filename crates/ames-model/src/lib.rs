//! Column catalog model for the Ames housing data.
//!
//! - [`column`]: documented variables, their measurement types and code tables
//! - [`schema`]: the name-keyed collection of documented columns
//! - [`taxonomy`]: type-partitioned views with stable, shared identity
//! - [`codec`]: categorical codecs used to type and rank label columns
//! - [`catalog`]: schema, views and target variables behind one service object

pub mod catalog;
pub mod codec;
pub mod column;
pub mod config;
pub mod error;
pub mod schema;
pub mod taxonomy;

pub use catalog::Catalog;
pub use codec::{LabelCodec, MISSING_RANK};
pub use column::{ColumnKind, ColumnMeta, Lookups, Realization, VariableType};
pub use config::{CatalogConfig, DEFAULT_DERIVED_DESCRIPTION};
pub use error::{ModelError, Result};
pub use schema::Schema;
pub use taxonomy::{Partition, Taxonomy, TaxonomyView, ViewHandle};
