//! Name reconciliation between the documentation and the dataset.
//!
//! A handful of documented names differ slightly from the dataset header: the
//! documentation truncates a name, or the spreadsheet dropped the spaces, or
//! the documentation added a dash. Reconciliation renames such schema entries
//! to the dataset's spelling.

use ames_model::Catalog;
use serde::{Deserialize, Serialize};

/// Rule under which a documented name matched a dataset column.
///
/// Variants are listed in the order they are tried for each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// The documented name is a prefix of the dataset column.
    Truncated,
    /// The dataset column without spaces equals the documented name.
    SpacesRemovedInData,
    /// Both names are equal once spaces are removed.
    SpacesRemovedInBoth,
    /// The documented name without dashes equals the dataset column.
    DashesRemovedInDocs,
}

fn without(raw: &str, ch: char) -> String {
    raw.chars().filter(|c| *c != ch).collect()
}

/// Checks one candidate against a documented name.
pub fn match_rule(documented: &str, actual: &str) -> Option<MatchRule> {
    if actual.starts_with(documented) {
        return Some(MatchRule::Truncated);
    }
    let actual_compact = without(actual, ' ');
    if actual_compact == documented {
        return Some(MatchRule::SpacesRemovedInData);
    }
    if actual_compact == without(documented, ' ') {
        return Some(MatchRule::SpacesRemovedInBoth);
    }
    if without(documented, '-') == actual {
        return Some(MatchRule::DashesRemovedInDocs);
    }
    None
}

/// First dataset column, in the given order, that matches `documented`.
pub fn find_match<'a, S: AsRef<str>>(
    documented: &str,
    actual: &'a [S],
) -> Option<(&'a str, MatchRule)> {
    actual.iter().find_map(|candidate| {
        let candidate = candidate.as_ref();
        match_rule(documented, candidate).map(|rule| (candidate, rule))
    })
}

/// A schema entry moved to the dataset's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
    pub rule: MatchRule,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub renamed: Vec<Rename>,
    /// Documented names absent from the dataset that matched nothing.
    pub unmatched: Vec<String>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.renamed.is_empty() && self.unmatched.is_empty()
    }
}

/// Aligns schema names with the dataset column names.
///
/// Every schema name absent from `actual` is renamed to the first column of
/// `actual` accepted by [`match_rule`]. Names are visited in ascending order
/// as of the call. Unless `defer_reindex` is set, the catalog views are
/// refilled afterwards; a deferring caller must re-index before reading views.
pub fn reconcile<S: AsRef<str>>(
    catalog: &mut Catalog,
    actual: &[S],
    defer_reindex: bool,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    let documented: Vec<String> = catalog.schema().names().map(str::to_string).collect();

    for name in documented {
        if actual.iter().any(|column| column.as_ref() == name) {
            continue;
        }
        match find_match(&name, actual) {
            Some((column, rule)) => {
                catalog.rename(&name, column);
                tracing::debug!(from = %name, to = %column, ?rule, "Renamed schema column");
                report.renamed.push(Rename {
                    from: name,
                    to: column.to_string(),
                    rule,
                });
            }
            None => {
                tracing::warn!(column = %name, "Documented column not found in data");
                report.unmatched.push(name);
            }
        }
    }

    if !defer_reindex {
        catalog.reindex();
    }
    tracing::info!(
        renamed = report.renamed.len(),
        unmatched = report.unmatched.len(),
        "Reconciled column names"
    );
    report
}

/// Propagates a column selection to the catalog.
///
/// When `correct_names` is set the names are reconciled first (with deferred
/// re-indexing), so a documented name that merely differs in spelling from a
/// kept column survives. Returns the dropped schema names.
pub fn retain_columns<S: AsRef<str>>(
    catalog: &mut Catalog,
    kept: &[S],
    correct_names: bool,
) -> Vec<String> {
    if correct_names {
        reconcile(catalog, kept, true);
    }
    catalog.retain_columns(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_rules() {
        assert_eq!(match_rule("Year Remod", "Year Remod/Add"), Some(MatchRule::Truncated));
        assert_eq!(match_rule("Lot Area", "Lot Area"), Some(MatchRule::Truncated));
        assert_eq!(
            match_rule("OverallQual", "Overall Qual"),
            Some(MatchRule::SpacesRemovedInData)
        );
        assert_eq!(
            match_rule("Overall Qual", "OverallQual"),
            Some(MatchRule::SpacesRemovedInBoth)
        );
        assert_eq!(
            match_rule("Heating-QC", "HeatingQC"),
            Some(MatchRule::DashesRemovedInDocs)
        );
        assert_eq!(match_rule("Lot Area", "Lot Frontage"), None);
    }

    #[test]
    fn test_truncation_only_runs_one_way() {
        assert_eq!(match_rule("Year Remod/Add", "Year Remod"), None);
    }

    #[test]
    fn test_find_match_prefers_earlier_candidate() {
        let actual = ["Garage Yr Blt", "Garage Yr"];
        assert_eq!(
            find_match("Garage Yr", &actual),
            Some(("Garage Yr Blt", MatchRule::Truncated))
        );
    }

    #[test]
    fn test_find_match_tries_all_rules_per_candidate() {
        // The first candidate wins through a lower-priority rule.
        let actual = ["BsmtFinSF1", "BsmtFin SF 1 extra"];
        assert_eq!(
            find_match("BsmtFin SF 1", &actual),
            Some(("BsmtFinSF1", MatchRule::SpacesRemovedInBoth))
        );
    }
}
