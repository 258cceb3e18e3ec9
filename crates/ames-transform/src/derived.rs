//! Discovery of columns added to the dataset after documentation.
//!
//! Cleaning the raw data adds columns the documentation never describes
//! (log-transformed targets, factor dummies, ...). They are all numeric. A
//! column named after an existing target (`SalePrice_log` for `SalePrice`)
//! becomes a target itself; any other becomes a continuous schema entry.

use ames_model::Catalog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DerivedKind {
    /// Extends the target named `base`.
    Target { base: String },
    /// A plain derived feature.
    Feature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedColumn {
    pub name: String,
    pub kind: DerivedKind,
}

/// Classifies the frame columns that are neither schema, target nor identifier columns.
///
/// Prefixes are checked against the targets known before discovery, so a new
/// target never claims another derived column. Columns keep frame order.
pub fn discover_derived_columns<S: AsRef<str>>(
    columns: &[S],
    catalog: &Catalog,
) -> Vec<DerivedColumn> {
    let known_targets = catalog.targets().to_vec();

    columns
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| {
            !catalog.schema().contains(name)
                && !catalog.is_target(name)
                && !catalog.is_index_column(name)
        })
        .map(|name| {
            let kind = known_targets
                .iter()
                .find(|target| name.starts_with(target.as_str()))
                .map_or(DerivedKind::Feature, |target| DerivedKind::Target {
                    base: target.clone(),
                });
            DerivedColumn {
                name: name.to_string(),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ames_model::{CatalogConfig, ColumnMeta, Schema};

    fn catalog() -> Catalog {
        let schema: Schema = [ColumnMeta::continuous("Lot Area", "size")]
            .into_iter()
            .collect();
        Catalog::new(schema, CatalogConfig::default())
    }

    #[test]
    fn test_target_prefix_wins() {
        let derived = discover_derived_columns(
            &["Order", "PID", "Lot Area", "SalePrice", "SalePrice_log", "years_since_built"],
            &catalog(),
        );

        assert_eq!(
            derived,
            [
                DerivedColumn {
                    name: "SalePrice_log".to_string(),
                    kind: DerivedKind::Target {
                        base: "SalePrice".to_string()
                    },
                },
                DerivedColumn {
                    name: "years_since_built".to_string(),
                    kind: DerivedKind::Feature,
                },
            ]
        );
    }

    #[test]
    fn test_new_targets_do_not_chain() {
        let derived =
            discover_derived_columns(&["SalePrice_log", "SalePrice_log_sq"], &catalog());
        let sale_price = DerivedKind::Target {
            base: "SalePrice".to_string(),
        };
        assert_eq!(derived.len(), 2);
        assert!(derived.iter().all(|column| column.kind == sale_price));
    }

    #[test]
    fn test_nothing_derived() {
        assert!(discover_derived_columns(&["Lot Area", "SalePrice"], &catalog()).is_empty());
    }
}
