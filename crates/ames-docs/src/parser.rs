//! Column metadata parser.
//!
//! The documentation lists variables one per line, each label variable
//! followed by its code table:
//!
//! ```text
//! Exter Qual (Ordinal): Evaluates the quality of the material on the exterior
//! Ex	Excellent
//! Gd	Good
//! TA	Average/Typical
//! Fa	Fair
//! Po	Poor
//! ```
//!
//! Two productions cover the grammar:
//!
//! - variable line: `<name><ws>(<type>)[\t]: <description>`
//! - code line: `<code>\t<description>`
//!
//! The parser is a two-state machine. With no label variable open only
//! variable lines are valid. Once a nominal or ordinal variable is read, code
//! lines attach to it until the next variable line. Anything else is a parse
//! error carrying the 1-based line number.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use ames_model::{CatalogConfig, ColumnMeta, Schema, VariableType};
use regex::Regex;

use crate::error::{DocsError, Result};

static VARIABLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\s+\((\w*)\)\t?: (.*)$").expect("Invalid variable line regex")
});

static REALIZATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\t(.*)$").expect("Invalid code line regex"));

/// A classified documentation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLine<'a> {
    Variable {
        name: &'a str,
        tag: &'a str,
        description: &'a str,
    },
    Realization {
        code: &'a str,
        description: &'a str,
    },
    Unrecognized,
}

impl<'a> DocLine<'a> {
    /// Classifies a line; variable lines take precedence over code lines.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = VARIABLE_LINE.captures(line) {
            let (_, [name, tag, description]) = caps.extract();
            return DocLine::Variable {
                name: name.trim(),
                tag,
                description,
            };
        }
        if let Some(caps) = REALIZATION_LINE.captures(line) {
            let (_, [code, description]) = caps.extract();
            return DocLine::Realization {
                code: code.trim(),
                description,
            };
        }
        DocLine::Unrecognized
    }
}

#[derive(Debug)]
enum State {
    /// No label variable open.
    Closed,
    /// Code lines attach to this label variable.
    Open(String),
}

/// Turns documentation lines into a [`Schema`].
#[derive(Debug, Clone)]
pub struct MetadataParser {
    reserved: BTreeSet<String>,
}

impl Default for MetadataParser {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl MetadataParser {
    /// Parser skipping the given reserved (identifier and target) names.
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    /// Parser skipping the configuration's identifier and target columns.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.reserved_names())
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Parses the lines in order.
    ///
    /// # Errors
    ///
    /// Fails on the first line that does not fit the grammar in the current state.
    pub fn parse<I, S>(&self, lines: I) -> Result<Schema>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut schema = Schema::new();
        let mut state = State::Closed;

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_number = idx + 1;

            match DocLine::classify(line) {
                DocLine::Variable {
                    name,
                    tag,
                    description,
                } => {
                    if name.is_empty() {
                        return Err(DocsError::MalformedLine {
                            line_number,
                            reason: "variable line without a name",
                            line: line.to_string(),
                        });
                    }
                    let variable_type =
                        tag.parse::<VariableType>()
                            .map_err(|_| DocsError::UnknownType {
                                line_number,
                                tag: tag.to_string(),
                                line: line.to_string(),
                            })?;
                    if self.is_reserved(name) {
                        tracing::debug!(column = %name, "Skipping reserved column");
                        state = State::Closed;
                        continue;
                    }
                    if schema
                        .insert(ColumnMeta::new(name, variable_type, description))
                        .is_some()
                    {
                        tracing::warn!(
                            column = %name,
                            line_number,
                            "Variable documented twice, keeping the later entry"
                        );
                    }
                    state = if variable_type.is_label() {
                        State::Open(name.to_string())
                    } else {
                        State::Closed
                    };
                }
                DocLine::Realization { code, description } => {
                    let State::Open(open) = &state else {
                        return Err(DocsError::OrphanRealization {
                            line_number,
                            line: line.to_string(),
                        });
                    };
                    let Some(column) = schema.get_mut(open) else {
                        continue;
                    };
                    // Open state is only entered for label columns.
                    if let Ok(Some(_)) = column.add_realization(code, description) {
                        tracing::warn!(
                            column = %open,
                            code = %code,
                            line_number,
                            "Code documented twice, keeping the later description"
                        );
                    }
                }
                DocLine::Unrecognized => {
                    let reason = match state {
                        State::Closed => "expected a variable line",
                        State::Open(_) => "expected a variable or code line",
                    };
                    return Err(DocsError::MalformedLine {
                        line_number,
                        reason,
                        line: line.to_string(),
                    });
                }
            }
        }

        tracing::debug!(columns = schema.len(), "Parsed column metadata");
        Ok(schema)
    }
}

/// Parses with the default reserved names (`Order`, `PID`, `SalePrice`).
pub fn parse_documentation<I, S>(lines: I) -> Result<Schema>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MetadataParser::default().parse(lines)
}
