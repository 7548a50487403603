//! Field tokenization shared by header resolution and row projection.
//!
//! Lines are split on every occurrence of the delimiter. Quotes do not
//! protect delimiters: `"Smith, John",30` yields three fields.

/// Splits `line` into cleaned fields.
pub fn split_fields(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.split(delimiter).map(clean_field)
}

/// Number of fields `line` splits into.
pub fn field_count(line: &str, delimiter: char) -> usize {
    line.split(delimiter).count()
}

/// Trims a raw field and strips one enclosing pair of double quotes.
pub fn clean_field(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("  plain  "), "plain");
        assert_eq!(clean_field(r#" "quoted" "#), "quoted");
        assert_eq!(clean_field(r#""""#), "");
        // Only one pair is removed
        assert_eq!(clean_field(r#"""twice"""#), r#""twice""#);
        // Unmatched quotes stay
        assert_eq!(clean_field(r#""open"#), r#""open"#);
        assert_eq!(clean_field(r#"close""#), r#"close""#);
        assert_eq!(clean_field(r#"""#), r#"""#);
    }

    #[test]
    fn test_quoted_delimiter_is_not_protected() {
        let fields: Vec<&str> = split_fields(r#""Smith, John",30"#, ',').collect();
        assert_eq!(fields, vec![r#""Smith"#, r#"John""#, "30"]);
    }

    #[test]
    fn test_field_count() {
        assert_eq!(field_count("a,b,c", ','), 3);
        assert_eq!(field_count("", ','), 1);
        assert_eq!(field_count("a,b,", ','), 3);
        assert_eq!(field_count("a;b", ','), 1);
    }
}
