//! Catalog configuration.

use serde::{Deserialize, Serialize};

/// Description given to columns found in the data but not in the documentation.
pub const DEFAULT_DERIVED_DESCRIPTION: &str = "derived variable";

/// Fixed names and defaults the catalog works with.
///
/// Defaults match the Ames housing data: the rows are identified by `Order`
/// and `PID`, and `SalePrice` is the modelling target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Row identifier columns; never schema entries, never typed.
    pub index_columns: Vec<String>,
    /// Seed target variables; never schema entries.
    pub target_variables: Vec<String>,
    /// Description for derived columns inserted during casting.
    pub derived_description: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_columns: vec!["Order".to_string(), "PID".to_string()],
            target_variables: vec!["SalePrice".to_string()],
            derived_description: DEFAULT_DERIVED_DESCRIPTION.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_index_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_target_variables<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_variables = targets.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_derived_description(mut self, description: impl Into<String>) -> Self {
        self.derived_description = description.into();
        self
    }

    /// Names the documentation parser must skip: identifiers and seed targets.
    pub fn reserved_names(&self) -> impl Iterator<Item = &str> {
        self.index_columns
            .iter()
            .chain(&self.target_variables)
            .map(String::as_str)
    }

    pub fn is_index_column(&self, name: &str) -> bool {
        self.index_columns.iter().any(|column| column == name)
    }
}
