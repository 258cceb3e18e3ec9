//! Schema-driven typing of the Ames housing dataset.
//!
//! - [`pipeline`]: `load_and_cast`, the end-to-end cast of a raw all-text frame
//! - [`cast`]: per-column float, integer and label casts
//! - [`derived`]: classification of undocumented columns
//! - [`ordinal`]: integer rank encoding of ordered label columns
//! - [`numeric`]: strict number parsing

pub mod cast;
pub mod derived;
pub mod error;
pub mod frame;
pub mod numeric;
pub mod ordinal;
pub mod pipeline;

pub use cast::{cast_float, cast_integer, cast_label};
pub use derived::{DerivedColumn, DerivedKind, discover_derived_columns};
pub use error::{CastError, Result};
pub use frame::TypedFrame;
pub use numeric::{parse_float, parse_integer};
pub use ordinal::{decode_ordinals, encode_ordinals};
pub use pipeline::{CastOptions, load_and_cast};
