//! Column name resolution.

use super::tokens::{field_count, split_fields};

/// Prefix of synthesized column names (`Column_1`, `Column_2`, ...).
pub const SYNTHETIC_COLUMN_PREFIX: &str = "Column_";

/// Resolves the header list from the first line.
///
/// With `has_header` the cleaned fields of `first_line` are the column names,
/// duplicates included. Otherwise the line only provides the column count and
/// names are synthesized.
pub fn resolve_headers(first_line: &str, delimiter: char, has_header: bool) -> Vec<String> {
    if has_header {
        split_fields(first_line, delimiter)
            .map(str::to_string)
            .collect()
    } else {
        synthesize_headers(field_count(first_line, delimiter))
    }
}

/// `Column_1 … Column_count`.
pub fn synthesize_headers(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("{SYNTHETIC_COLUMN_PREFIX}{i}"))
        .collect()
}
