//! CSV reading utilities.

mod reader;

pub use reader::{
    RawTableOptions, column_names, read_raw_table, read_raw_table_with, validate_encoding,
};
