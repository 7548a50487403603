//! Splitting decoded text into logical lines.

use crate::error::{IngestError, Result};

/// Splits `text` on `\r\n` and `\n` boundaries.
///
/// With `skip_empty` set, lines that are empty after trimming are dropped.
/// A zero-length document has no lines at all.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`] when no lines remain.
pub fn split_lines(text: &str, skip_empty: bool) -> Result<Vec<&str>> {
    if text.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !skip_empty || !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    Ok(lines)
}
