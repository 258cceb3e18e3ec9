//! Column name reconciliation for the Ames catalog.

pub mod reconcile;

pub use reconcile::{
    MatchRule, ReconcileReport, Rename, find_match, match_rule, reconcile, retain_columns,
};
