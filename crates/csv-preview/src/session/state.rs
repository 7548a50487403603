//! Ingestion state machine.
//!
//! ```text
//!          select_file            run ok
//!   Idle ──────────────► FileSelected ─────────► Parsed
//!    ▲                    │       ▲                │
//!    │                    │ run   │ select_file /  │
//!    │                    │ error │ commit         │
//!    │                    ▼       │                │
//!    └───── reset ────── Failed ──┘◄───── reset ───┘
//! ```
//!
//! A single enum replaces independent "selected file", "dataset", "error"
//! and "loading" fields, so those can never disagree with each other.

use crate::error::IngestError;
use crate::source::SourceFile;
use crate::types::{ParsedDataset, Preview};
use std::sync::Arc;

/// Current state of ingestion for a session.
#[derive(Debug, Clone, Default)]
pub enum IngestionState {
    /// No file selected.
    #[default]
    Idle,
    /// A run for `file` is in flight.
    FileSelected {
        file: SourceFile,
        generation: u64,
        /// Preview from before a configuration re-run, still readable until
        /// the new run succeeds. `None` for a fresh file selection.
        previous: Option<Arc<Preview>>,
    },
    /// The last run succeeded.
    Parsed {
        file: SourceFile,
        preview: Arc<Preview>,
    },
    /// The last run failed. No dataset is exposed.
    Failed {
        file: SourceFile,
        error: IngestError,
    },
}

impl IngestionState {
    /// Short name for logs and frontends.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileSelected { .. } => "file_selected",
            Self::Parsed { .. } => "parsed",
            Self::Failed { .. } => "failed",
        }
    }

    /// The file this state refers to.
    pub fn file(&self) -> Option<&SourceFile> {
        match self {
            Self::Idle => None,
            Self::FileSelected { file, .. }
            | Self::Parsed { file, .. }
            | Self::Failed { file, .. } => Some(file),
        }
    }

    /// The complete preview currently visible, if any.
    pub fn preview(&self) -> Option<&Arc<Preview>> {
        match self {
            Self::Parsed { preview, .. } => Some(preview),
            Self::FileSelected { previous, .. } => previous.as_ref(),
            Self::Idle | Self::Failed { .. } => None,
        }
    }

    pub fn dataset(&self) -> Option<&ParsedDataset> {
        self.preview().map(|preview| &preview.dataset)
    }

    pub fn error(&self) -> Option<&IngestError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::FileSelected { .. })
    }
}
