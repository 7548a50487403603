//! Projection of data lines onto the header list.

use super::tokens::split_fields;
use crate::types::{PREVIEW_ROW_LIMIT, Record};

/// Builds at most [`PREVIEW_ROW_LIMIT`] records from `lines`.
///
/// Fields are matched to headers by position. Missing trailing fields become
/// empty strings and fields beyond the header count are dropped.
pub fn project_rows(lines: &[&str], headers: &[String], delimiter: char) -> Vec<Record> {
    lines
        .iter()
        .take(PREVIEW_ROW_LIMIT)
        .map(|line| project_line(line, headers, delimiter))
        .collect()
}

fn project_line(line: &str, headers: &[String], delimiter: char) -> Record {
    let mut fields = split_fields(line, delimiter);
    let pairs = headers
        .iter()
        .map(|header| (header.clone(), fields.next().unwrap_or_default().to_string()))
        .collect();
    Record::from_fields(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_positional_projection() {
        let rows = project_rows(&["1, \"two\" ,3"], &headers(&["a", "b", "c"]), ',');
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("a"), Some("1"));
        assert_eq!(rows[0].get("b"), Some("two"));
        assert_eq!(rows[0].get("c"), Some("3"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = project_rows(&["1"], &headers(&["a", "b", "c"]), ',');
        assert_eq!(rows[0].values().collect::<Vec<_>>(), vec!["1", "", ""]);
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let rows = project_rows(&["1,2,3,4,5"], &headers(&["a", "b"]), ',');
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].values().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn test_duplicate_headers_keep_both_values() {
        let rows = project_rows(&["1,2"], &headers(&["x", "x"]), ',');
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            vec![("x", "1"), ("x", "2")]
        );
    }

    #[test]
    fn test_row_limit() {
        let lines = vec!["1,2"; 120];
        let rows = project_rows(&lines, &headers(&["a", "b"]), ',');
        assert_eq!(rows.len(), PREVIEW_ROW_LIMIT);
    }

    #[test]
    fn test_no_lines() {
        assert!(project_rows(&[], &headers(&["a"]), ',').is_empty());
    }
}
