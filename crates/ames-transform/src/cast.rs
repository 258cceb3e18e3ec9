//! Per-column casts.
//!
//! Each cast reads the column as text, converts every non-null cell and
//! replaces the column in place. Null cells stay null. The first cell that
//! fails to convert aborts the cast with the column name and the value.

use ames_model::LabelCodec;
use polars::prelude::*;

use crate::error::{CastError, Result};
use crate::numeric::{parse_float, parse_integer};

/// Text view of a column, casting non-string columns first.
fn text_column(df: &DataFrame, name: &str) -> Result<Column> {
    let column = df
        .column(name)
        .map_err(|_| CastError::ColumnNotFound(name.to_string()))?;
    Ok(column.cast(&DataType::String)?)
}

/// Casts a column to `Float64`.
pub fn cast_float(df: &mut DataFrame, name: &str) -> Result<()> {
    let text = text_column(df, name)?;
    let mut values: Vec<Option<f64>> = Vec::with_capacity(text.len());
    for cell in text.str()? {
        let value = match cell {
            None => None,
            Some(raw) => Some(parse_float(raw).ok_or_else(|| CastError::NotNumeric {
                column: name.to_string(),
                value: raw.to_string(),
            })?),
        };
        values.push(value);
    }
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Casts a column to `Int64`; decimals are rejected.
pub fn cast_integer(df: &mut DataFrame, name: &str) -> Result<()> {
    let text = text_column(df, name)?;
    let mut values: Vec<Option<i64>> = Vec::with_capacity(text.len());
    for cell in text.str()? {
        let value = match cell {
            None => None,
            Some(raw) => Some(parse_integer(raw).ok_or_else(|| CastError::NotInteger {
                column: name.to_string(),
                value: raw.to_string(),
            })?),
        };
        values.push(value);
    }
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Checks every cell of a label column against its codec.
///
/// The column is left (or made) a `String` column. Codes the codec declares
/// but the data never uses remain valid categories.
pub fn cast_label(df: &mut DataFrame, name: &str, codec: &LabelCodec) -> Result<()> {
    let text = text_column(df, name)?;
    if let Some(unknown) = text.str()?.into_iter().flatten().find(|v| !codec.contains(v)) {
        return Err(CastError::UnknownCategory {
            column: name.to_string(),
            value: unknown.to_string(),
        });
    }
    df.with_column(text)?;
    Ok(())
}
