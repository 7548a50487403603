//! CSV Preview Library
//!
//! Turns a user-supplied CSV file into a bounded preview: column names, up to
//! 50 header-aligned rows, and a short text sample ready for an LLM-based
//! analysis service.
//!
//! # Overview
//!
//! - **Line splitting**: `\r\n` and `\n` boundaries, optional blank-line removal
//! - **Delimiter inference**: comma, semicolon, tab or pipe, by mean occurrence
//! - **Header resolution**: first line, or synthesized `Column_N` names
//! - **Row projection**: tolerant positional mapping onto the headers
//! - **Sessions**: staged configuration edits and stale-run protection
//! - **Analysis seam**: pluggable [`ai::AnalysisProvider`]
//!
//! The tokenizer is deliberately simple: quotes never protect delimiters or
//! newlines, and doubled quotes are not unescaped.
//!
//! # Quick Start
//!
//! ```rust
//! use csv_preview::{DelimiterSetting, IngestionConfig, parse_text};
//!
//! let config = IngestionConfig::builder()
//!     .delimiter(DelimiterSetting::Auto)
//!     .has_header(true)
//!     .build();
//!
//! let preview = parse_text("city;population\nLyon;522000\nNantes;320000", &config)?;
//!
//! assert_eq!(preview.dataset.delimiter, ';');
//! assert_eq!(preview.dataset.headers, vec!["city", "population"]);
//! assert_eq!(preview.dataset.rows[0].get("city"), Some("Lyon"));
//! # Ok::<(), csv_preview::IngestError>(())
//! ```
//!
//! # Sessions
//!
//! Applications that let users pick files and change settings should go
//! through [`IngestionSession`], which owns the configuration, reads and
//! decodes files asynchronously, and discards results of runs that were
//! overtaken by a newer file selection or settings change.
//!
//! ```rust,ignore
//! use csv_preview::{IngestionSession, SourceFile};
//!
//! let session = IngestionSession::new();
//! let preview = session.select_file(SourceFile::from_path("data.csv")?).await?;
//!
//! session.begin_edit();
//! session.update_staged(|config| config.skip_empty_lines = false);
//! if let Some(result) = session.commit().await {
//!     let preview = result?;
//! }
//! ```

pub mod ai;
pub mod config;
pub mod decode;
pub mod error;
pub mod parser;
pub mod sample;
pub mod session;
pub mod source;
pub mod types;

// Re-exports for convenient access
pub use config::{DelimiterSetting, IngestionConfig, IngestionConfigBuilder, TextEncoding};
pub use error::{IngestError, Result as IngestResult};
pub use parser::parse_text;
pub use sample::{SAMPLE_LINE_LIMIT, analysis_prompt};
pub use session::{CancellationToken, CompletedLoad, IngestionSession, IngestionState, PendingLoad};
pub use source::SourceFile;
pub use types::{PREVIEW_ROW_LIMIT, ParsedDataset, Preview, Record};
