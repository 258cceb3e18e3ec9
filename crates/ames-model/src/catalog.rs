//! The column catalog: schema, taxonomy views and target variables.
//!
//! A catalog is built once from parsed documentation and then handed to the
//! name reconciler and the caster, the only operations that mutate it. All
//! mutators take `&mut self`; views are re-indexed explicitly.

use crate::column::ColumnMeta;
use crate::config::CatalogConfig;
use crate::schema::Schema;
use crate::taxonomy::{Partition, Taxonomy, ViewHandle};

#[derive(Debug)]
pub struct Catalog {
    config: CatalogConfig,
    schema: Schema,
    taxonomy: Taxonomy,
    targets: Vec<String>,
}

impl Catalog {
    /// Creates an indexed catalog; the target list starts from the configured seed.
    pub fn new(schema: Schema, config: CatalogConfig) -> Self {
        let taxonomy = Taxonomy::indexed(&schema);
        let targets = config.target_variables.clone();
        Self {
            config,
            schema,
            taxonomy,
            targets,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Target variables: the seed plus any derived targets discovered since.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn is_target(&self, name: &str) -> bool {
        self.targets.iter().any(|target| target == name)
    }

    pub fn is_index_column(&self, name: &str) -> bool {
        self.config.is_index_column(name)
    }

    pub fn describe(&self, name: &str) -> Option<&ColumnMeta> {
        self.schema.get(name)
    }

    /// Sorted schema column names, as of the last re-index.
    pub fn variables(&self) -> Vec<String> {
        self.taxonomy.view(Partition::All).variables()
    }

    pub fn view(&self, partition: Partition) -> ViewHandle {
        self.taxonomy.view(partition).clone()
    }

    pub fn all(&self) -> ViewHandle {
        self.view(Partition::All)
    }

    pub fn continuous(&self) -> ViewHandle {
        self.view(Partition::Continuous)
    }

    pub fn discrete(&self) -> ViewHandle {
        self.view(Partition::Discrete)
    }

    pub fn numeric(&self) -> ViewHandle {
        self.view(Partition::Numeric)
    }

    pub fn nominal(&self) -> ViewHandle {
        self.view(Partition::Nominal)
    }

    pub fn ordinal(&self) -> ViewHandle {
        self.view(Partition::Ordinal)
    }

    pub fn label(&self) -> ViewHandle {
        self.view(Partition::Label)
    }

    /// Refills every view from the schema.
    pub fn reindex(&mut self) {
        self.taxonomy.reindex(&self.schema);
    }

    /// Renames a schema entry without re-indexing.
    ///
    /// Returns false when `old` is not a schema column.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if !self.schema.contains(old) {
            return false;
        }
        if self.schema.rename(old, new).is_some() {
            tracing::warn!(from = %old, to = %new, "Rename replaced an existing schema column");
        }
        true
    }

    /// Inserts a schema entry without re-indexing.
    pub fn insert(&mut self, column: ColumnMeta) -> Option<ColumnMeta> {
        self.schema.insert(column)
    }

    /// Removes a schema entry without re-indexing.
    pub fn remove(&mut self, name: &str) -> Option<ColumnMeta> {
        self.schema.remove(name)
    }

    /// Appends a target variable unless already listed.
    pub fn push_target(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.is_target(&name) {
            self.targets.push(name);
        }
    }

    /// Drops every schema column not in `kept` and re-indexes.
    ///
    /// Returns the dropped names in ascending order.
    pub fn retain_columns<S: AsRef<str>>(&mut self, kept: &[S]) -> Vec<String> {
        let dropped: Vec<String> = self
            .schema
            .names()
            .filter(|name| !kept.iter().any(|k| k.as_ref() == *name))
            .map(str::to_string)
            .collect();
        for name in &dropped {
            self.schema.remove(name);
            tracing::warn!(
                column = %name,
                "Documented column absent from data, dropped from schema"
            );
        }
        self.reindex();
        dropped
    }
}
