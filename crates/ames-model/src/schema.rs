//! The schema: documented column name to column metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnMeta;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: BTreeMap<String, ColumnMeta>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a column under its own name, returning any entry it replaced.
    pub fn insert(&mut self, column: ColumnMeta) -> Option<ColumnMeta> {
        self.columns.insert(column.name.clone(), column)
    }

    pub fn get(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ColumnMeta> {
        self.columns.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ColumnMeta> {
        self.columns.remove(name)
    }

    /// Moves the entry stored under `old` to `new`.
    ///
    /// The previous key is deleted. An entry already stored under `new` is
    /// replaced and returned. Does nothing when `old` is absent.
    pub fn rename(&mut self, old: &str, new: &str) -> Option<ColumnMeta> {
        let mut column = self.columns.remove(old)?;
        column.name = new.to_string();
        self.columns.insert(new.to_string(), column)
    }

    /// Column names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnMeta)> {
        self.columns.iter().map(|(name, column)| (name.as_str(), column))
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.values()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnMeta> for Schema {
    fn from_iter<T: IntoIterator<Item = ColumnMeta>>(iter: T) -> Self {
        let mut schema = Schema::new();
        for column in iter {
            schema.insert(column);
        }
        schema
    }
}
