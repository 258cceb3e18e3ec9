//! Column metadata parsed from the data documentation.
//!
//! Every documented variable carries one of four measurement types. The two
//! label types (nominal and ordinal) also carry the table of codes that may
//! appear in the data, and ordinal variables additionally remember the order
//! in which the documentation lists those codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Measurement type of a documented variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    /// Real-valued measurement (areas, prices, ...).
    Continuous,
    /// Integer count (rooms, years, ...).
    Discrete,
    /// Unordered label drawn from a fixed code table.
    Nominal,
    /// Ranked label drawn from a fixed code table.
    Ordinal,
}

impl VariableType {
    /// All four types, in documentation vocabulary order.
    pub const ALL: [VariableType; 4] = [
        VariableType::Continuous,
        VariableType::Discrete,
        VariableType::Nominal,
        VariableType::Ordinal,
    ];

    /// Returns the lowercase tag as it appears (case-insensitively) in the documentation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::Continuous => "continuous",
            VariableType::Discrete => "discrete",
            VariableType::Nominal => "nominal",
            VariableType::Ordinal => "ordinal",
        }
    }

    /// Returns true for the two label types that own a code table.
    pub fn is_label(&self) -> bool {
        matches!(self, VariableType::Nominal | VariableType::Ordinal)
    }

    /// Returns true for the two numeric types.
    pub fn is_numeric(&self) -> bool {
        matches!(self, VariableType::Continuous | VariableType::Discrete)
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "continuous" => Ok(VariableType::Continuous),
            "discrete" => Ok(VariableType::Discrete),
            "nominal" => Ok(VariableType::Nominal),
            "ordinal" => Ok(VariableType::Ordinal),
            _ => Err(ModelError::UnknownVariableType(s.to_string())),
        }
    }
}

/// One documented code of a label variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realization {
    pub code: String,
    pub description: String,
}

/// Code table of a label variable, kept in documentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lookups {
    entries: Vec<Realization>,
}

impl Lookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a code, returning the previous description if the code was already present.
    ///
    /// A repeated code keeps its original position.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<String> {
        let code = code.into();
        let description = description.into();
        if let Some(existing) = self.entries.iter_mut().find(|entry| entry.code == code) {
            return Some(std::mem::replace(&mut existing.description, description));
        }
        self.entries.push(Realization { code, description });
        None
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.description.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// Codes in documentation order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Realization> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-specific payload of a column.
///
/// Lookups only exist for label types and the documented order only exists
/// for ordinals, so both are carried by the variants that own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnKind {
    Continuous,
    Discrete,
    Nominal {
        lookups: Lookups,
    },
    Ordinal {
        lookups: Lookups,
        /// Codes as listed in the documentation; a permutation of the lookup keys.
        order: Vec<String>,
    },
}

impl ColumnKind {
    /// Empty payload for a freshly documented variable of the given type.
    pub fn empty(variable_type: VariableType) -> Self {
        match variable_type {
            VariableType::Continuous => ColumnKind::Continuous,
            VariableType::Discrete => ColumnKind::Discrete,
            VariableType::Nominal => ColumnKind::Nominal {
                lookups: Lookups::new(),
            },
            VariableType::Ordinal => ColumnKind::Ordinal {
                lookups: Lookups::new(),
                order: Vec::new(),
            },
        }
    }

    pub fn variable_type(&self) -> VariableType {
        match self {
            ColumnKind::Continuous => VariableType::Continuous,
            ColumnKind::Discrete => VariableType::Discrete,
            ColumnKind::Nominal { .. } => VariableType::Nominal,
            ColumnKind::Ordinal { .. } => VariableType::Ordinal,
        }
    }
}

/// Metadata of a single schema column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl ColumnMeta {
    pub fn new(
        name: impl Into<String>,
        variable_type: VariableType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ColumnKind::empty(variable_type),
        }
    }

    /// Continuous column without a code table (used for derived columns).
    pub fn continuous(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, VariableType::Continuous, description)
    }

    pub fn variable_type(&self) -> VariableType {
        self.kind.variable_type()
    }

    pub fn lookups(&self) -> Option<&Lookups> {
        match &self.kind {
            ColumnKind::Nominal { lookups } | ColumnKind::Ordinal { lookups, .. } => Some(lookups),
            ColumnKind::Continuous | ColumnKind::Discrete => None,
        }
    }

    pub fn order(&self) -> Option<&[String]> {
        match &self.kind {
            ColumnKind::Ordinal { order, .. } => Some(order),
            _ => None,
        }
    }

    /// Records a documented code for a label column.
    ///
    /// Ordinal codes are appended to the documented order the first time they
    /// are seen. Returns the replaced description when the code was already
    /// documented for this column.
    pub fn add_realization(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Option<String>, ModelError> {
        let code = code.into();
        match &mut self.kind {
            ColumnKind::Nominal { lookups } => Ok(lookups.insert(code, description)),
            ColumnKind::Ordinal { lookups, order } => {
                let previous = lookups.insert(code.clone(), description);
                if previous.is_none() {
                    order.push(code);
                }
                Ok(previous)
            }
            ColumnKind::Continuous | ColumnKind::Discrete => Err(ModelError::NotLabelColumn {
                column: self.name.clone(),
            }),
        }
    }
}
