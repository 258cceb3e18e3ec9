//! Strict numeric parsing of text cells.
//!
//! Values are trimmed and parsed as-is. Thousands separators, decimal commas
//! and other formatting are rejected rather than repaired.

/// Parses a real number (`"8450"`, `"-0.5"`, `"1.2e3"`, `"nan"`).
pub fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Parses an integer literal; `"3.0"` and `"3.5"` are rejected.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
