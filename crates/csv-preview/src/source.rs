//! Accepted source files.
//!
//! A [`SourceFile`] can only be constructed for a `.csv` name, so everything
//! downstream can assume the extension check already happened. Content is
//! either held in memory (drag and drop, uploads) or read from disk each time
//! the file is ingested.

use crate::error::{IngestError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the bytes of a source file come from.
#[derive(Clone)]
pub enum FileContent {
    Bytes(Arc<[u8]>),
    Path(PathBuf),
}

impl fmt::Debug for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

/// A file accepted for ingestion.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    content: FileContent,
}

impl SourceFile {
    /// Accepts in-memory content under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidExtension`] unless `name` ends in `.csv`.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        ensure_csv_name(&name)?;
        Ok(Self {
            name,
            content: FileContent::Bytes(Arc::from(bytes.into())),
        })
    }

    /// Accepts a file on disk. The file is not read until ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidExtension`] unless the file name ends in
    /// `.csv`.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ensure_csv_name(&name)?;
        Ok(Self {
            name,
            content: FileContent::Path(path),
        })
    }

    /// File name without directories.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }

    /// Path on disk, for path-backed files.
    pub fn path(&self) -> Option<&Path> {
        match &self.content {
            FileContent::Path(path) => Some(path),
            FileContent::Bytes(_) => None,
        }
    }

    /// Loads the raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnreadableFile`] if a path-backed file cannot
    /// be read.
    pub async fn read(&self) -> Result<Arc<[u8]>> {
        match &self.content {
            FileContent::Bytes(bytes) => Ok(Arc::clone(bytes)),
            FileContent::Path(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    IngestError::UnreadableFile(format!("{}: {}", path.display(), e))
                })?;
                Ok(Arc::from(bytes))
            }
        }
    }
}

/// Whether `name` carries a `.csv` extension (ASCII case-insensitive).
pub fn is_csv_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".csv")
}

fn ensure_csv_name(name: &str) -> Result<()> {
    if is_csv_name(name) {
        Ok(())
    } else {
        Err(IngestError::InvalidExtension(name.to_string()))
    }
}
