//! Raw dataset reading.
//!
//! The dataset is read with every column as text. Label columns use `"NA"` as
//! a real category ("no alley access", "no pool", ...), so only empty cells
//! are treated as missing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Options for [`read_raw_table_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTableOptions {
    /// Field separator byte.
    pub separator: u8,
}

impl Default for RawTableOptions {
    fn default() -> Self {
        Self { separator: b',' }
    }
}

impl RawTableOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Rejects empty files and UTF-16 byte order marks.
///
/// A UTF-8 BOM is accepted and stripped from the header by the reader.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

fn strip_header_bom(df: &mut DataFrame) -> Result<()> {
    let first = df.get_column_names().first().map(|name| name.as_str().to_string());
    if let Some(first) = first
        && let Some(stripped) = first.strip_prefix(UTF8_BOM)
    {
        df.rename(&first, stripped.into())?;
    }
    Ok(())
}

fn validate_header(df: &DataFrame, path: &Path) -> Result<()> {
    if df
        .get_column_names()
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reads a comma separated dataset with every column as text.
pub fn read_raw_table(path: &Path) -> Result<DataFrame> {
    read_raw_table_with(path, &RawTableOptions::default())
}

/// Reads a dataset with every column as text.
///
/// Schema inference is disabled so numeric-looking columns stay strings until
/// the caster types them. No value is declared null except empty cells.
pub fn read_raw_table_with(path: &Path, options: &RawTableOptions) -> Result<DataFrame> {
    validate_encoding(path)?;

    let separator = options.separator;
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_separator(separator).with_missing_is_null(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    strip_header_bom(&mut df)?;
    validate_header(&df, path)?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded raw dataset"
    );
    Ok(df)
}

/// Column names of a frame, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}
