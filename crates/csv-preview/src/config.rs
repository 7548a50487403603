//! Configuration types for CSV ingestion.
//!
//! [`IngestionConfig`] is an immutable `Copy` value. Changing a setting means
//! building a new configuration; the session swaps the whole value in one step
//! so consumers never observe a half-updated configuration.

use serde::{Deserialize, Serialize};

/// Field separator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DelimiterSetting {
    /// Infer the delimiter from the first lines of the file
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ";")]
    Semicolon,
    #[serde(rename = "\t")]
    Tab,
    #[serde(rename = "|")]
    Pipe,
}

impl DelimiterSetting {
    /// The fixed separator character, or `None` for [`DelimiterSetting::Auto`].
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Auto => None,
            Self::Comma => Some(','),
            Self::Semicolon => Some(';'),
            Self::Tab => Some('\t'),
            Self::Pipe => Some('|'),
        }
    }
}

/// Text encoding used to decode the raw file bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "ISO-8859-1")]
    Iso8859_1,
    #[serde(rename = "ASCII")]
    Ascii,
}

impl TextEncoding {
    /// Encoding label as accepted by the WHATWG encoding standard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::Ascii => "ASCII",
        }
    }
}

/// Settings that control how a CSV file is turned into a preview.
///
/// # Example
///
/// ```rust
/// use csv_preview::config::{DelimiterSetting, IngestionConfig};
///
/// let config = IngestionConfig::builder()
///     .delimiter(DelimiterSetting::Semicolon)
///     .has_header(false)
///     .build();
///
/// assert_eq!(config.delimiter.as_char(), Some(';'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Field separator, or `Auto` to detect it.
    /// Default: Auto
    pub delimiter: DelimiterSetting,

    /// Whether the first line holds column names.
    /// Default: true
    pub has_header: bool,

    /// Encoding of the raw bytes.
    /// Default: UTF-8
    pub encoding: TextEncoding,

    /// Whether lines that are empty after trimming are dropped.
    /// Default: true
    pub skip_empty_lines: bool,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            delimiter: DelimiterSetting::default(),
            has_header: true,
            encoding: TextEncoding::default(),
            skip_empty_lines: true,
        }
    }
}

impl IngestionConfig {
    /// Create a new configuration builder.
    pub fn builder() -> IngestionConfigBuilder {
        IngestionConfigBuilder::default()
    }
}

/// Builder for [`IngestionConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct IngestionConfigBuilder {
    delimiter: Option<DelimiterSetting>,
    has_header: Option<bool>,
    encoding: Option<TextEncoding>,
    skip_empty_lines: Option<bool>,
}

impl IngestionConfigBuilder {
    /// Set the delimiter, or [`DelimiterSetting::Auto`] to detect it.
    pub fn delimiter(mut self, delimiter: DelimiterSetting) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set whether the first line is a header row.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    /// Set the text encoding of the file.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Enable or disable dropping of blank lines.
    pub fn skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = Some(skip);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> IngestionConfig {
        let defaults = IngestionConfig::default();
        IngestionConfig {
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
            has_header: self.has_header.unwrap_or(defaults.has_header),
            encoding: self.encoding.unwrap_or(defaults.encoding),
            skip_empty_lines: self.skip_empty_lines.unwrap_or(defaults.skip_empty_lines),
        }
    }
}
