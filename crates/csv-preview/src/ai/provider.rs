//! Analysis provider trait for abstracting LLM interactions.
//!
//! The ingestion pipeline only produces a prompt. Sending it somewhere is
//! the job of an [`AnalysisProvider`], so the pipeline works with any LLM
//! backend (or none at all).
//!
//! # Implementing a New Provider
//!
//! 1. Create a new file in `src/ai/` (e.g., `ollama.rs`)
//! 2. Implement the [`AnalysisProvider`] trait for your provider struct
//! 3. Export the provider in `src/ai/mod.rs`

use anyhow::Result;

/// Trait for services that turn an analysis prompt into a text answer.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow usage across threads.
///
/// # Error Handling
///
/// Implementations should return meaningful errors via `anyhow::Result`.
/// [`request_analysis`](super::request_analysis) converts them into
/// [`IngestError::AnalysisFailure`](crate::IngestError::AnalysisFailure).
pub trait AnalysisProvider: Send + Sync {
    /// Send `prompt` to the service and return its answer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API call fails
    /// - The response cannot be parsed
    /// - The response carries no text
    fn analyze(&self, prompt: &str) -> Result<String>;

    /// Get the provider name for logging and debugging.
    fn name(&self) -> &str;

    /// Get the model being used by this provider.
    ///
    /// Returns `None` if the provider doesn't expose model information.
    fn model(&self) -> Option<&str> {
        None
    }
}
