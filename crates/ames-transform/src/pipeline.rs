//! The schema-driven casting pipeline.
//!
//! ```text
//! raw (all text) -> reconcile names -> drop absent schema entries -> reindex
//!   -> cast numeric/label columns -> classify derived columns -> reindex
//!   -> [ordinal encoding]
//! ```

use std::collections::BTreeMap;

use ames_model::{Catalog, ColumnMeta, LabelCodec};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cast::{cast_float, cast_integer, cast_label};
use crate::derived::{DerivedKind, discover_derived_columns};
use crate::error::Result;
use crate::frame::TypedFrame;
use crate::ordinal::encode_ordinals;

/// Options for [`load_and_cast`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastOptions {
    /// Replace ordered label columns with their integer ranks.
    pub ordinal_encoded: bool,
}

impl CastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ordinal_encoded(mut self, ordinal_encoded: bool) -> Self {
        self.ordinal_encoded = ordinal_encoded;
        self
    }
}

/// Data columns of a raw frame; identifier columns are not data.
fn data_columns(raw: &DataFrame, catalog: &Catalog) -> Vec<String> {
    raw.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .filter(|name| !catalog.is_index_column(name))
        .collect()
}

/// Types every column of `raw` according to the catalog.
///
/// The catalog is updated along the way: schema names are aligned with the
/// frame header, documented columns missing from the frame are dropped,
/// derived columns are registered as targets or continuous entries, and the
/// views are re-indexed.
///
/// # Errors
///
/// Fails on the first cell that does not convert to its column's type.
pub fn load_and_cast(
    raw: &DataFrame,
    catalog: &mut Catalog,
    options: &CastOptions,
) -> Result<TypedFrame> {
    let columns = data_columns(raw, catalog);

    let dropped = ames_map::retain_columns(catalog, &columns, true);
    tracing::info!(
        columns = columns.len(),
        schema = catalog.schema().len(),
        dropped = dropped.len(),
        "Aligned schema with dataset"
    );

    let mut df = raw.clone();

    let targets: Vec<String> = catalog.targets().to_vec();
    for target in &targets {
        if columns.contains(target) {
            cast_float(&mut df, target)?;
        } else {
            tracing::debug!(column = %target, "Target variable not in dataset");
        }
    }
    for name in catalog.continuous().variables() {
        cast_float(&mut df, &name)?;
    }
    for name in catalog.discrete().variables() {
        cast_integer(&mut df, &name)?;
    }

    let mut codecs = BTreeMap::new();
    for name in catalog.label().variables() {
        let Some(codec) = catalog.describe(&name).and_then(LabelCodec::for_column) else {
            continue;
        };
        cast_label(&mut df, &name, &codec)?;
        codecs.insert(name, codec);
    }

    // Every derived column is cast before the catalog learns about any of them.
    let derived = discover_derived_columns(&columns, catalog);
    for column in &derived {
        cast_float(&mut df, &column.name)?;
    }
    for column in &derived {
        match &column.kind {
            DerivedKind::Target { base } => {
                tracing::debug!(column = %column.name, base = %base, "Derived target variable");
                catalog.push_target(column.name.clone());
            }
            DerivedKind::Feature => {
                let description = catalog.config().derived_description.clone();
                catalog.insert(ColumnMeta::continuous(column.name.clone(), description));
            }
        }
    }
    catalog.reindex();

    tracing::info!(
        rows = df.height(),
        continuous = catalog.continuous().len(),
        discrete = catalog.discrete().len(),
        labels = codecs.len(),
        derived = derived.len(),
        targets = catalog.targets().len(),
        "Cast dataset"
    );

    let typed = TypedFrame::new(df, codecs);
    if options.ordinal_encoded {
        encode_ordinals(&typed)
    } else {
        Ok(typed)
    }
}
