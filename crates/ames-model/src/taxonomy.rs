//! Type-partitioned views over the schema.
//!
//! The taxonomy keeps one view per partition: the four base types, the two
//! unions (numeric = continuous + discrete, label = nominal + ordinal) and a
//! view over the whole schema. Each view holds the matching columns and their
//! names in ascending order.
//!
//! Views are shared handles. Re-indexing clears and refills every view in
//! place, so a handle obtained before a rename or a column drop observes the
//! new contents without being fetched again. Between a schema mutation and
//! the next [`Taxonomy::reindex`] the views are stale.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::column::{ColumnMeta, VariableType};
use crate::schema::Schema;

/// The seven views kept by a [`Taxonomy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Partition {
    All,
    Continuous,
    Discrete,
    Numeric,
    Nominal,
    Ordinal,
    Label,
}

impl Partition {
    pub const ALL: [Partition; 7] = [
        Partition::All,
        Partition::Continuous,
        Partition::Discrete,
        Partition::Numeric,
        Partition::Nominal,
        Partition::Ordinal,
        Partition::Label,
    ];

    /// Returns true if columns of `variable_type` belong to this partition.
    pub fn includes(&self, variable_type: VariableType) -> bool {
        match self {
            Partition::All => true,
            Partition::Continuous => variable_type == VariableType::Continuous,
            Partition::Discrete => variable_type == VariableType::Discrete,
            Partition::Numeric => variable_type.is_numeric(),
            Partition::Nominal => variable_type == VariableType::Nominal,
            Partition::Ordinal => variable_type == VariableType::Ordinal,
            Partition::Label => variable_type.is_label(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::All => "all",
            Partition::Continuous => "continuous",
            Partition::Discrete => "discrete",
            Partition::Numeric => "numeric",
            Partition::Nominal => "nominal",
            Partition::Ordinal => "ordinal",
            Partition::Label => "label",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contents of one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyView {
    columns: BTreeMap<String, ColumnMeta>,
    variables: Vec<String>,
}

impl TaxonomyView {
    pub fn columns(&self) -> &BTreeMap<String, ColumnMeta> {
        &self.columns
    }

    /// Column names in ascending order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn get(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn refill<'a>(&mut self, columns: impl Iterator<Item = &'a ColumnMeta>) {
        self.columns.clear();
        self.variables.clear();
        for column in columns {
            self.columns.insert(column.name.clone(), column.clone());
        }
        self.variables.extend(self.columns.keys().cloned());
    }
}

/// Shared handle to a view; clones point at the same contents.
///
/// Accessors return owned snapshots so no borrow outlives a call.
#[derive(Debug, Clone, Default)]
pub struct ViewHandle(Rc<RefCell<TaxonomyView>>);

impl ViewHandle {
    /// Owned copy of the view's current contents.
    pub fn snapshot(&self) -> TaxonomyView {
        self.0.borrow().clone()
    }

    /// Snapshot of the sorted column names.
    pub fn variables(&self) -> Vec<String> {
        self.0.borrow().variables.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.borrow().contains(name)
    }

    pub fn get(&self, name: &str) -> Option<ColumnMeta> {
        self.0.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns true if both handles refer to the same view.
    pub fn same_view(&self, other: &ViewHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The full set of views derived from one schema.
#[derive(Debug, Default)]
pub struct Taxonomy {
    all: ViewHandle,
    continuous: ViewHandle,
    discrete: ViewHandle,
    numeric: ViewHandle,
    nominal: ViewHandle,
    ordinal: ViewHandle,
    label: ViewHandle,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Taxonomy indexed from `schema`.
    pub fn indexed(schema: &Schema) -> Self {
        let taxonomy = Self::new();
        taxonomy.reindex(schema);
        taxonomy
    }

    /// Clears and refills every view from the current schema contents.
    pub fn reindex(&self, schema: &Schema) {
        for partition in Partition::ALL {
            let handle = self.view(partition);
            handle.0.borrow_mut().refill(
                schema
                    .columns()
                    .filter(|column| partition.includes(column.variable_type())),
            );
        }
        tracing::debug!(
            columns = schema.len(),
            continuous = self.continuous.len(),
            discrete = self.discrete.len(),
            nominal = self.nominal.len(),
            ordinal = self.ordinal.len(),
            "Reindexed column taxonomy"
        );
    }

    pub fn view(&self, partition: Partition) -> &ViewHandle {
        match partition {
            Partition::All => &self.all,
            Partition::Continuous => &self.continuous,
            Partition::Discrete => &self.discrete,
            Partition::Numeric => &self.numeric,
            Partition::Nominal => &self.nominal,
            Partition::Ordinal => &self.ordinal,
            Partition::Label => &self.label,
        }
    }
}
