//! Ames data documentation: sources and the column metadata parser.
//!
//! ```text
//! DocumentSource::lines() -> MetadataParser::parse() -> Schema
//! ```

pub mod error;
pub mod parser;
pub mod source;

pub use error::{DocsError, Result};
pub use parser::{DocLine, MetadataParser, parse_documentation};
pub use source::{DocumentSource, DocumentWindow, FileDocument, TextDocument, clean_lines};
