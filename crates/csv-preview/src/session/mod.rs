//! Ingestion session: configuration ownership and the ingestion lifecycle.
//!
//! [`IngestionSession`] owns the active [`IngestionConfig`], the staged copy
//! edited by a settings dialog, and the [`IngestionState`]. All of it lives
//! behind one `parking_lot::RwLock`, and every operation takes the lock once,
//! so readers see either the old or the new value of everything.
//!
//! # Ingestion runs
//!
//! A run has three steps:
//!
//! 1. [`IngestionSession::begin_load`] (under the lock) bumps the generation
//!    number, cancels the previous run's token and moves to `FileSelected`.
//! 2. [`PendingLoad::run`] (no lock held) reads and decodes the file, then
//!    parses it. This is the only step that awaits.
//! 3. [`IngestionSession::apply`] (under the lock) installs the outcome if the
//!    run is still current. A run overtaken by a newer selection, commit or
//!    reset returns [`IngestError::Superseded`] and changes nothing.
//!
//! [`IngestionSession::select_file`] and [`IngestionSession::commit`] chain
//! the three steps.
//!
//! # Example
//!
//! ```rust
//! use csv_preview::{IngestionSession, SourceFile};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), csv_preview::IngestError> {
//! let session = IngestionSession::new();
//! let file = SourceFile::from_bytes("scores.csv", "name;score\nAda;9".as_bytes().to_vec())?;
//!
//! let preview = session.select_file(file).await?;
//! assert_eq!(preview.dataset.headers, vec!["name", "score"]);
//!
//! // Settings dialog: edit a staged copy, then commit it
//! session.begin_edit();
//! session.update_staged(|config| config.has_header = false);
//! let reparsed = session.commit().await.expect("a file is loaded")?;
//! assert_eq!(reparsed.dataset.headers, vec!["Column_1", "Column_2"]);
//! # Ok(())
//! # }
//! ```

mod cancellation;
mod state;

pub use cancellation::CancellationToken;
pub use state::IngestionState;

use crate::config::IngestionConfig;
use crate::decode::decode_in_background;
use crate::error::{IngestError, Result};
use crate::parser::parse_text;
use crate::source::SourceFile;
use crate::types::{ParsedDataset, Preview};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct SessionInner {
    active: IngestionConfig,
    staged: Option<IngestionConfig>,
    state: IngestionState,
    generation: u64,
    token: CancellationToken,
}

impl SessionInner {
    /// Supersedes any run in flight and starts a new one for `file`.
    fn start_run(&mut self, file: SourceFile, keep_previous: bool) -> PendingLoad {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.generation += 1;

        let previous = if keep_previous {
            self.state.preview().cloned()
        } else {
            None
        };

        info!(
            file = file.name(),
            generation = self.generation,
            "Starting ingestion run"
        );

        self.state = IngestionState::FileSelected {
            file: file.clone(),
            generation: self.generation,
            previous,
        };

        PendingLoad {
            file,
            config: self.active,
            generation: self.generation,
            token: self.token.clone(),
        }
    }
}

/// Shared handle to one ingestion session.
///
/// Clones refer to the same session.
#[derive(Debug, Clone, Default)]
pub struct IngestionSession {
    inner: Arc<RwLock<SessionInner>>,
}

static_assertions::assert_impl_all!(IngestionSession: Send, Sync);
static_assertions::assert_impl_all!(PendingLoad: Send);

impl IngestionSession {
    /// Creates an idle session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle session with `config` active.
    pub fn with_config(config: IngestionConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                active: config,
                ..SessionInner::default()
            })),
        }
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// The active configuration.
    pub fn config(&self) -> IngestionConfig {
        self.inner.read().active
    }

    /// The staged configuration, if an edit is in progress.
    pub fn staged(&self) -> Option<IngestionConfig> {
        self.inner.read().staged
    }

    /// Starts an edit by copying the active configuration into staging.
    ///
    /// Any previous staged copy is discarded. Returns the new staged copy.
    pub fn begin_edit(&self) -> IngestionConfig {
        let mut inner = self.inner.write();
        inner.staged = Some(inner.active);
        inner.active
    }

    /// Applies `edit` to the staged copy only.
    ///
    /// `edit` runs on a copy with no lock held, so it may read the session.
    /// The copy is written back only if the edit is still in progress.
    ///
    /// Returns `false` (and does nothing) when no edit is in progress.
    pub fn update_staged(&self, edit: impl FnOnce(&mut IngestionConfig)) -> bool {
        let Some(mut config) = self.inner.read().staged else {
            return false;
        };

        edit(&mut config);

        match self.inner.write().staged.as_mut() {
            Some(staged) => {
                *staged = config;
                true
            }
            None => false,
        }
    }

    /// Discards the staged copy. The active configuration and any dataset are
    /// left untouched.
    ///
    /// Returns `false` when no edit was in progress.
    pub fn cancel_edit(&self) -> bool {
        self.inner.write().staged.take().is_some()
    }

    /// Promotes the staged copy to active.
    ///
    /// If a file is loaded, the whole pipeline is re-run against it under the
    /// new configuration and `Some(outcome)` is returned. The previous preview
    /// stays visible until the re-run succeeds. Returns `None` when nothing
    /// was staged or no file is loaded.
    pub async fn commit(&self) -> Option<Result<Arc<Preview>>> {
        let pending = self.begin_commit()?;
        Some(self.apply(pending.run().await))
    }

    /// First step of [`commit`](Self::commit): swap the configuration and,
    /// if a file is loaded, start its re-run.
    pub fn begin_commit(&self) -> Option<PendingLoad> {
        let mut inner = self.inner.write();
        let staged = inner.staged.take()?;
        inner.active = staged;
        debug!(config = ?staged, "Committed ingestion configuration");

        let file = inner.state.file()?.clone();
        Some(inner.start_run(file, true))
    }

    // ------------------------------------------------------------------------
    // Ingestion
    // ------------------------------------------------------------------------

    /// Snapshot of the ingestion state.
    pub fn state(&self) -> IngestionState {
        self.inner.read().state.clone()
    }

    /// The visible preview, if any.
    pub fn preview(&self) -> Option<Arc<Preview>> {
        self.inner.read().state.preview().cloned()
    }

    /// The visible dataset, if any.
    pub fn dataset(&self) -> Option<ParsedDataset> {
        self.inner.read().state.dataset().cloned()
    }

    /// Generation number of the most recent run.
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// Selects `file` and ingests it with the active configuration.
    ///
    /// The previous dataset is discarded as soon as the new file is selected.
    pub async fn select_file(&self, file: SourceFile) -> Result<Arc<Preview>> {
        let pending = self.begin_load(file);
        self.apply(pending.run().await)
    }

    /// First step of a run: supersede any run in flight and select `file`.
    pub fn begin_load(&self, file: SourceFile) -> PendingLoad {
        self.inner.write().start_run(file, false)
    }

    /// Last step of a run: install `completed` if it is still current.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Superseded`] for stale runs, otherwise the
    /// run's own error after moving to `Failed`.
    pub fn apply(&self, completed: CompletedLoad) -> Result<Arc<Preview>> {
        let mut inner = self.inner.write();

        if completed.generation != inner.generation || completed.token.is_cancelled() {
            warn!(
                file = completed.file.name(),
                generation = completed.generation,
                current = inner.generation,
                "Discarding result of superseded ingestion run"
            );
            return Err(IngestError::Superseded);
        }

        match completed.outcome {
            Ok(preview) => {
                let preview = Arc::new(preview);
                info!(
                    file = completed.file.name(),
                    columns = preview.dataset.column_count(),
                    rows = preview.dataset.row_count(),
                    "Ingestion succeeded"
                );
                inner.state = IngestionState::Parsed {
                    file: completed.file,
                    preview: Arc::clone(&preview),
                };
                Ok(preview)
            }
            Err(error) => {
                warn!(file = completed.file.name(), %error, "Ingestion failed");
                inner.state = IngestionState::Failed {
                    file: completed.file,
                    error: error.clone(),
                };
                Err(error)
            }
        }
    }

    /// Returns to `Idle`, dropping the dataset and superseding any run in
    /// flight. The configuration is kept.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.token.cancel();
        inner.token = CancellationToken::new();
        inner.generation += 1;
        inner.state = IngestionState::Idle;
        debug!(generation = inner.generation, "Session reset");
    }
}

/// An ingestion run that has been started but not yet executed.
#[derive(Debug)]
#[must_use = "a pending load does nothing until run and applied"]
pub struct PendingLoad {
    file: SourceFile,
    config: IngestionConfig,
    generation: u64,
    token: CancellationToken,
}

impl PendingLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Reads, decodes and parses the file without holding the session lock.
    pub async fn run(self) -> CompletedLoad {
        let outcome = self.execute().await;
        CompletedLoad {
            file: self.file,
            generation: self.generation,
            token: self.token,
            outcome,
        }
    }

    async fn execute(&self) -> Result<Preview> {
        let bytes = self.file.read().await?;
        self.ensure_current()?;

        let text = decode_in_background(bytes, self.config.encoding).await?;
        self.ensure_current()?;

        parse_text(&text, &self.config)
    }

    fn ensure_current(&self) -> Result<()> {
        if self.token.is_cancelled() {
            Err(IngestError::Superseded)
        } else {
            Ok(())
        }
    }
}

/// Outcome of [`PendingLoad::run`], to be handed to [`IngestionSession::apply`].
#[derive(Debug)]
#[must_use = "a completed load must be applied to the session"]
pub struct CompletedLoad {
    file: SourceFile,
    generation: u64,
    token: CancellationToken,
    outcome: Result<Preview>,
}

impl CompletedLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn outcome(&self) -> &Result<Preview> {
        &self.outcome
    }
}
