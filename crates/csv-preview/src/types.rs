//! Data types produced by the ingestion pipeline.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Maximum number of rows materialized for display.
pub const PREVIEW_ROW_LIMIT: usize = 50;

/// One preview row, keyed by the resolved header list.
///
/// Stored as ordered `(column, value)` pairs rather than a map so column
/// order survives and duplicate header names are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub(crate) fn from_fields(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of the first column named `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value at column position `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(_, value)| value.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Serialized as an array of values in column order, aligned with
/// [`ParsedDataset::headers`]. An object would collapse duplicate column names.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.fields.len()))?;
        for value in self.values() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Headers plus a bounded set of header-aligned rows.
///
/// Every record has exactly `headers.len()` entries and there are never more
/// than [`PREVIEW_ROW_LIMIT`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDataset {
    /// Column names in file order, duplicates kept.
    pub headers: Vec<String>,
    /// Preview rows.
    pub rows: Vec<Record>,
    /// Delimiter the rows were split on (detected or configured).
    pub delimiter: char,
}

impl ParsedDataset {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Everything one ingestion run hands to its consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub dataset: ParsedDataset,
    /// First lines of the file, for the analysis collaborator.
    pub sample_text: String,
    /// Number of lines after splitting and blank-line filtering.
    pub line_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_fields(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_get_returns_first_duplicate() {
        let row = record(&[("id", "1"), ("name", "Ada"), ("id", "2")]);
        assert_eq!(row.get("id"), Some("1"));
        assert_eq!(row.value(2), Some("2"));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let row = record(&[("b", "2"), ("a", "1")]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"["2","1"]"#);
    }

    #[test]
    fn test_duplicate_columns_survive_json() {
        let row = record(&[("id", "1"), ("name", "Ada"), ("id", "2")]);
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json, serde_json::json!(["1", "Ada", "2"]));
        assert_eq!(json[0], row.get("id").unwrap());
    }

    #[test]
    fn test_dataset_serialization() {
        let dataset = ParsedDataset {
            headers: vec!["a".to_string()],
            rows: vec![record(&[("a", "x")])],
            delimiter: ';',
        };
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["headers"][0], "a");
        assert_eq!(json["rows"][0][0], "x");
        assert_eq!(json["delimiter"], ";");
    }
}
