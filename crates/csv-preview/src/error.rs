//! Error types for the CSV ingestion pipeline.
//!
//! Every failure an ingestion attempt can end in is a variant of
//! [`IngestError`]. Errors are serializable so a frontend can receive them
//! as `{ code, message }` objects and pick a message by code.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for CSV ingestion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The selected file does not carry a `.csv` name.
    #[error("'{0}' is not a CSV file")]
    InvalidExtension(String),

    /// Reading or decoding the file content failed.
    #[error("Failed to read file: {0}")]
    UnreadableFile(String),

    /// No lines remained after splitting and blank-line filtering.
    #[error("The file contains no data")]
    EmptyInput,

    /// The external analysis collaborator failed.
    #[error("Analysis failed: {0}")]
    AnalysisFailure(String),

    /// A newer ingestion run started before this one finished.
    ///
    /// Never shown to users: the newer run owns the session state.
    #[error("Ingestion run superseded by a newer one")]
    Superseded,
}

impl IngestError {
    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidExtension(_) => "INVALID_EXTENSION",
            Self::UnreadableFile(_) => "UNREADABLE_FILE",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::AnalysisFailure(_) => "ANALYSIS_FAILURE",
            Self::Superseded => "SUPERSEDED",
        }
    }

    /// Human-readable message, one per failure kind.
    ///
    /// Unlike `Display`, this never includes low-level details such as OS
    /// error strings.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidExtension(_) => "Please select a file with a .csv extension.",
            Self::UnreadableFile(_) => {
                "The file could not be read. Check the file and the selected encoding."
            }
            Self::EmptyInput => "The file is empty.",
            Self::AnalysisFailure(_) => "The analysis service could not process this file.",
            Self::Superseded => "A newer file is being loaded.",
        }
    }

    /// Check if this error only means a newer run took over.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }

    /// Whether the ingestion state machine records this error as `Failed`.
    ///
    /// Extension rejection happens before a run starts and analysis
    /// failures happen after it ended, so neither touches ingestion state.
    pub fn fails_ingestion(&self) -> bool {
        matches!(self, Self::UnreadableFile(_) | Self::EmptyInput)
    }
}

impl From<std::io::Error> for IngestError {
    fn from(e: std::io::Error) -> Self {
        Self::UnreadableFile(e.to_string())
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for IngestError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("IngestError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(IngestError::EmptyInput.error_code(), "EMPTY_INPUT");
        assert_eq!(
            IngestError::InvalidExtension("data.txt".to_string()).error_code(),
            "INVALID_EXTENSION"
        );
    }

    #[test]
    fn test_is_superseded() {
        assert!(IngestError::Superseded.is_superseded());
        assert!(!IngestError::EmptyInput.is_superseded());
    }

    #[test]
    fn test_fails_ingestion() {
        assert!(IngestError::EmptyInput.fails_ingestion());
        assert!(IngestError::UnreadableFile("gone".to_string()).fails_ingestion());
        assert!(!IngestError::InvalidExtension("a.txt".to_string()).fails_ingestion());
        assert!(!IngestError::AnalysisFailure("503".to_string()).fails_ingestion());
    }

    #[test]
    fn test_io_error_becomes_unreadable() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: IngestError = io.into();
        assert_eq!(error.error_code(), "UNREADABLE_FILE");
        assert!(error.to_string().contains("no such file"));
    }

    #[test]
    fn test_error_serialization() {
        let error = IngestError::InvalidExtension("notes.txt".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("INVALID_EXTENSION"));
        assert!(json.contains("notes.txt"));
    }

    #[test]
    fn test_user_message_hides_details() {
        let error = IngestError::UnreadableFile("permission denied (os error 13)".to_string());
        assert!(!error.user_message().contains("os error"));
    }
}
