//! The typed dataset produced by the caster.

use std::collections::BTreeMap;

use ames_model::LabelCodec;
use polars::prelude::*;

/// A cast DataFrame with the codecs of its label columns.
///
/// Numeric columns are `Float64` or `Int64`. Label columns stay `String`,
/// every value validated against its codec; once ordinal encoded, the ordered
/// label columns are `Int32` ranks decodable through the same codecs.
#[derive(Debug, Clone)]
pub struct TypedFrame {
    frame: DataFrame,
    codecs: BTreeMap<String, LabelCodec>,
    ordinal_encoded: bool,
}

impl TypedFrame {
    pub fn new(frame: DataFrame, codecs: BTreeMap<String, LabelCodec>) -> Self {
        Self {
            frame,
            codecs,
            ordinal_encoded: false,
        }
    }

    pub(crate) fn with_encoding(mut self, ordinal_encoded: bool) -> Self {
        self.ordinal_encoded = ordinal_encoded;
        self
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn codecs(&self) -> &BTreeMap<String, LabelCodec> {
        &self.codecs
    }

    pub fn codec(&self, column: &str) -> Option<&LabelCodec> {
        self.codecs.get(column)
    }

    /// Names of the ordered label columns, ascending.
    pub fn ordinal_columns(&self) -> impl Iterator<Item = &str> {
        self.codecs
            .iter()
            .filter(|(_, codec)| codec.is_ordered())
            .map(|(name, _)| name.as_str())
    }

    /// Returns true once ordered label columns hold integer ranks.
    pub fn is_ordinal_encoded(&self) -> bool {
        self.ordinal_encoded
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.as_str().to_string())
            .collect()
    }
}
