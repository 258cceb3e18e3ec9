//! Categorical codecs for label columns.
//!
//! A codec is the fixed set of valid categories for a label column plus, for
//! ordinal columns, the rank order of those categories. Values are validated
//! on the way in and ranked on the way out.
//!
//! The documentation lists ordinal codes from best to worst (`Ex`, `Gd`, ...,
//! `Po`). Ranks run the other way, so the documented order is reversed when an
//! ordinal codec is built: the last documented code receives rank 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnMeta;

/// Rank used for values without a defined position (missing cells).
pub const MISSING_RANK: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CodecRepr", into = "CodecRepr")]
pub struct LabelCodec {
    categories: Vec<String>,
    ordered: bool,
    positions: BTreeMap<String, u32>,
}

/// Serialized form; the position index is rebuilt on load.
#[derive(Clone, Serialize, Deserialize)]
struct CodecRepr {
    categories: Vec<String>,
    ordered: bool,
}

impl From<CodecRepr> for LabelCodec {
    fn from(repr: CodecRepr) -> Self {
        LabelCodec::build(repr.categories, repr.ordered)
    }
}

impl From<LabelCodec> for CodecRepr {
    fn from(codec: LabelCodec) -> Self {
        CodecRepr {
            categories: codec.categories,
            ordered: codec.ordered,
        }
    }
}

impl LabelCodec {
    fn build(categories: Vec<String>, ordered: bool) -> Self {
        let positions = categories
            .iter()
            .enumerate()
            .map(|(idx, category)| (category.clone(), idx as u32))
            .collect();
        Self {
            categories,
            ordered,
            positions,
        }
    }

    /// Unordered codec over the given codes, kept in the given order.
    pub fn nominal<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(codes.into_iter().map(Into::into).collect(), false)
    }

    /// Ordered codec from the documented order (best first); ranks are reversed.
    pub fn ordinal<I, S>(documented_order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<String> = documented_order.into_iter().map(Into::into).collect();
        categories.reverse();
        Self::build(categories, true)
    }

    /// Builds the codec a schema column calls for; `None` for numeric columns.
    pub fn for_column(column: &ColumnMeta) -> Option<Self> {
        match (column.order(), column.lookups()) {
            (Some(order), _) => Some(Self::ordinal(order.iter().map(String::as_str))),
            (None, Some(lookups)) => Some(Self::nominal(lookups.codes())),
            (None, None) => None,
        }
    }

    /// Categories in rank order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    /// Position of a category, `None` when the value is not declared.
    pub fn position(&self, value: &str) -> Option<u32> {
        self.positions.get(value).copied()
    }

    /// Integer rank of a (possibly missing) cell, [`MISSING_RANK`] when it has none.
    pub fn encode(&self, value: Option<&str>) -> i32 {
        value
            .and_then(|v| self.position(v))
            .map_or(MISSING_RANK, |rank| rank as i32)
    }

    /// Category for a rank produced by [`LabelCodec::encode`].
    pub fn decode(&self, rank: i32) -> Option<&str> {
        if rank < 0 {
            return None;
        }
        self.categories.get(rank as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::VariableType;

    #[test]
    fn ordinal_codec_reverses_documented_order() {
        let codec = LabelCodec::ordinal(["Ex", "Gd", "Po"]);
        assert!(codec.is_ordered());
        assert_eq!(codec.categories(), ["Po", "Gd", "Ex"]);
        assert_eq!(codec.encode(Some("Po")), 0);
        assert_eq!(codec.encode(Some("Gd")), 1);
        assert_eq!(codec.encode(Some("Ex")), 2);
    }

    #[test]
    fn missing_and_unknown_values_get_sentinel() {
        let codec = LabelCodec::ordinal(["Ex", "Gd", "Po"]);
        assert_eq!(codec.encode(None), MISSING_RANK);
        assert_eq!(codec.encode(Some("TA")), MISSING_RANK);
        assert_eq!(codec.decode(MISSING_RANK), None);
    }

    #[test]
    fn decode_inverts_encode() {
        let codec = LabelCodec::ordinal(["Ex", "Gd", "TA", "Fa", "Po"]);
        for value in ["Ex", "Gd", "TA", "Fa", "Po"] {
            assert_eq!(codec.decode(codec.encode(Some(value))), Some(value));
        }
    }

    #[test]
    fn nominal_codec_keeps_documented_codes() {
        let mut column = ColumnMeta::new("Alley", VariableType::Nominal, "alley access");
        column.add_realization("Grvl", "Gravel").unwrap();
        column.add_realization("Pave", "Paved").unwrap();
        column.add_realization("NA", "No alley access").unwrap();

        let codec = LabelCodec::for_column(&column).unwrap();
        assert!(!codec.is_ordered());
        assert_eq!(codec.categories(), ["Grvl", "Pave", "NA"]);
        assert!(codec.contains("NA"));
        assert!(!codec.contains("Dirt"));
    }

    #[test]
    fn numeric_column_has_no_codec() {
        let column = ColumnMeta::continuous("Lot Area", "size");
        assert!(LabelCodec::for_column(&column).is_none());
    }

    #[test]
    fn deserialized_codec_still_resolves_positions() {
        let codec = LabelCodec::ordinal(["Ex", "Gd", "Po"]);
        let json = serde_json::to_string(&codec).unwrap();
        let round: LabelCodec = serde_json::from_str(&json).unwrap();
        assert_eq!(round, codec);
        assert_eq!(round.encode(Some("Ex")), 2);
    }
}
