//! Integer rank encoding of ordered label columns.

use ames_model::LabelCodec;
use polars::prelude::*;

use crate::error::{CastError, Result};
use crate::frame::TypedFrame;

fn encode_column(df: &mut DataFrame, name: &str, codec: &LabelCodec) -> Result<()> {
    let column = df
        .column(name)
        .map_err(|_| CastError::ColumnNotFound(name.to_string()))?;
    let ranks: Vec<i32> = column
        .str()?
        .into_iter()
        .map(|value| codec.encode(value))
        .collect();
    df.with_column(Series::new(name.into(), ranks))?;
    Ok(())
}

fn decode_column(df: &mut DataFrame, name: &str, codec: &LabelCodec) -> Result<()> {
    let column = df
        .column(name)
        .map_err(|_| CastError::ColumnNotFound(name.to_string()))?;
    let labels: Vec<Option<&str>> = column
        .i32()?
        .into_iter()
        .map(|rank| rank.and_then(|rank| codec.decode(rank)))
        .collect();
    let series = Series::new(name.into(), labels);
    df.with_column(series)?;
    Ok(())
}

/// Replaces every ordered label column with its `Int32` ranks.
///
/// Missing cells become [`ames_model::MISSING_RANK`]. Unordered label and
/// numeric columns pass through. Encoding an already encoded frame is a no-op.
pub fn encode_ordinals(typed: &TypedFrame) -> Result<TypedFrame> {
    if typed.is_ordinal_encoded() {
        return Ok(typed.clone());
    }
    let mut df = typed.frame().clone();
    let mut encoded = 0usize;
    for name in typed.ordinal_columns() {
        if let Some(codec) = typed.codec(name) {
            encode_column(&mut df, name, codec)?;
            encoded += 1;
        }
    }
    tracing::debug!(columns = encoded, "Encoded ordinal columns");
    Ok(TypedFrame::new(df, typed.codecs().clone()).with_encoding(true))
}

/// Restores the labels of an encoded frame; sentinel ranks become nulls.
pub fn decode_ordinals(typed: &TypedFrame) -> Result<TypedFrame> {
    if !typed.is_ordinal_encoded() {
        return Ok(typed.clone());
    }
    let mut df = typed.frame().clone();
    for name in typed.ordinal_columns() {
        if let Some(codec) = typed.codec(name) {
            decode_column(&mut df, name, codec)?;
        }
    }
    Ok(TypedFrame::new(df, typed.codecs().clone()))
}
