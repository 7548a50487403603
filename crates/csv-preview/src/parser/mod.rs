//! CSV ingestion pipeline.
//!
//! Turns decoded text into a [`Preview`]:
//!
//! ```text
//! text ─► split_lines ─► detect_delimiter (auto only) ─► resolve_headers ─► project_rows
//!              │
//!              └────────► sample_text
//! ```
//!
//! Parsing is synchronous and its cost is bounded by the preview limits,
//! whatever the size of the document.
//!
//! # Example
//!
//! ```rust
//! use csv_preview::{IngestionConfig, parse_text};
//!
//! let preview = parse_text("a,b,c\n1,2,3\n4,5,6", &IngestionConfig::default())?;
//! assert_eq!(preview.dataset.delimiter, ',');
//! assert_eq!(preview.dataset.headers, vec!["a", "b", "c"]);
//! assert_eq!(preview.dataset.rows[1].get("c"), Some("6"));
//! # Ok::<(), csv_preview::IngestError>(())
//! ```

pub mod delimiter;
pub mod header;
pub mod lines;
pub mod rows;
pub mod tokens;

pub use delimiter::detect_delimiter;
pub use header::resolve_headers;
pub use lines::split_lines;
pub use rows::project_rows;

use crate::config::IngestionConfig;
use crate::error::Result;
use crate::sample::sample_text;
use crate::types::{ParsedDataset, Preview};
use tracing::debug;

/// Runs the full pipeline over already decoded text.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`](crate::IngestError::EmptyInput) when
/// no lines remain after splitting and filtering.
pub fn parse_text(text: &str, config: &IngestionConfig) -> Result<Preview> {
    let lines = split_lines(text, config.skip_empty_lines)?;

    let delimiter = config
        .delimiter
        .as_char()
        .unwrap_or_else(|| detect_delimiter(&lines));

    let headers = resolve_headers(lines[0], delimiter, config.has_header);
    let data_lines = if config.has_header {
        &lines[1..]
    } else {
        &lines[..]
    };
    let rows = project_rows(data_lines, &headers, delimiter);

    debug!(
        delimiter = ?delimiter,
        columns = headers.len(),
        rows = rows.len(),
        lines = lines.len(),
        "Parsed CSV text"
    );

    Ok(Preview {
        dataset: ParsedDataset {
            headers,
            rows,
            delimiter,
        },
        sample_text: sample_text(&lines),
        line_count: lines.len(),
    })
}
