//! Cancellation token for ingestion runs.
//!
//! Every ingestion run carries a [`CancellationToken`]. Starting a newer run
//! or resetting the session cancels the token of the run in flight, which
//! then stops before decoding or parsing and reports itself as superseded.
//!
//! # Example
//!
//! ```
//! use csv_preview::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let run_token = token.clone();
//!
//! assert!(!run_token.is_cancelled());
//! token.cancel();
//! assert!(run_token.is_cancelled());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A token used to signal that an ingestion run should stop.
///
/// Clones share the same flag.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

// Runs are awaited on tokio worker threads while the session keeps a clone
static_assertions::assert_impl_all!(CancellationToken: Send, Sync);

impl CancellationToken {
    /// Creates a new, non-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation. Safe to call from any thread, and more than once.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if [`cancel()`](Self::cancel) has been called on this
    /// token or any of its clones.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
