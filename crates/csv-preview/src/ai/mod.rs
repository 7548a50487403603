//! Seam to the external analysis collaborator.
//!
//! [`request_analysis`] builds the analysis prompt from a [`Preview`]'s sample
//! text and hands it to an [`AnalysisProvider`]. Provider failures are caught
//! here and surfaced as [`IngestError::AnalysisFailure`]; they never touch
//! ingestion state.
//!
//! # Feature Flag
//!
//! The [`AnalysisProvider`] trait is always available. The HTTP-backed
//! [`OpenRouterProvider`] requires the `ai` feature (enabled by default).
//!
//! ```toml
//! # Disable the HTTP provider for a smaller binary
//! csv-preview = { version = "0.1", default-features = false }
//! ```

// Provider trait is always available (for custom implementations)
mod provider;
pub use provider::AnalysisProvider;

// Concrete providers require the "ai" feature
#[cfg(feature = "ai")]
mod openrouter;

#[cfg(feature = "ai")]
pub use openrouter::{OpenRouterConfig, OpenRouterConfigBuilder, OpenRouterProvider};

use crate::error::{IngestError, Result};
use crate::sample::analysis_prompt;
use crate::types::Preview;
use tracing::{info, warn};

/// Sends the analysis prompt for `preview` to `provider`.
///
/// # Errors
///
/// Returns [`IngestError::AnalysisFailure`] if the provider fails.
pub fn request_analysis(provider: &dyn AnalysisProvider, preview: &Preview) -> Result<String> {
    let prompt = analysis_prompt(&preview.sample_text);
    info!(
        provider = provider.name(),
        model = provider.model().unwrap_or("default"),
        prompt_chars = prompt.len(),
        "Requesting analysis"
    );

    provider.analyze(&prompt).map_err(|e| {
        warn!(provider = provider.name(), error = %e, "Analysis failed");
        IngestError::AnalysisFailure(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IngestionConfig;
    use crate::parser::parse_text;
    use anyhow::anyhow;
    use std::sync::Mutex;

    struct RecordingProvider {
        prompts: Mutex<Vec<String>>,
    }

    impl AnalysisProvider for RecordingProvider {
        fn analyze(&self, prompt: &str) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Looks like sales data.".to_string())
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    struct FailingProvider;

    impl AnalysisProvider for FailingProvider {
        fn analyze(&self, _prompt: &str) -> anyhow::Result<String> {
            Err(anyhow!("API Error 503: upstream unavailable"))
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    fn preview() -> Preview {
        parse_text("region,total\nnorth,10\nsouth,12", &IngestionConfig::default()).unwrap()
    }

    #[test]
    fn test_prompt_carries_sample() {
        let provider = RecordingProvider {
            prompts: Mutex::new(Vec::new()),
        };
        let answer = request_analysis(&provider, &preview()).unwrap();

        assert_eq!(answer, "Looks like sales data.");
        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("region,total\nnorth,10\nsouth,12"));
    }

    #[test]
    fn test_provider_error_becomes_analysis_failure() {
        let error = request_analysis(&FailingProvider, &preview()).unwrap_err();
        assert_eq!(error.error_code(), "ANALYSIS_FAILURE");
        assert!(error.to_string().contains("503"));
        assert!(!error.fails_ingestion());
    }
}
