//! OpenRouter AI provider implementation.
//!
//! This module provides the [`OpenRouterProvider`] which implements the [`AnalysisProvider`]
//! trait for the OpenRouter API (<https://openrouter.ai/>).
//!
//! OpenRouter provides access to multiple LLM models through a unified API.
//! The blocking client is used, so call it outside of async contexts.

use super::AnalysisProvider;
use anyhow::{Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default OpenRouter API endpoint.
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model to use for dataset analysis.
const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

/// Default timeout for API requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default temperature for model responses.
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default max tokens for responses.
const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct OpenRouterRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<Message>,
}

/// Configuration for the OpenRouter provider.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRouterConfig {
    /// The model to use (e.g., "deepseek/deepseek-chat", "openai/gpt-4").
    pub model: String,
    /// Temperature for response generation (0.0 - 2.0).
    pub temperature: f32,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Base URL for the API (useful for proxies or custom endpoints).
    pub base_url: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OpenRouterConfig {
    /// Create a new configuration builder.
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::default()
    }
}

/// Builder for [`OpenRouterConfig`].
#[derive(Default)]
pub struct OpenRouterConfigBuilder {
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout_secs: Option<u64>,
    base_url: Option<String>,
}

impl OpenRouterConfigBuilder {
    /// Set the model to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature (0.0 - 2.0).
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set a custom base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the configuration. Unset fields keep their defaults.
    pub fn build(self) -> OpenRouterConfig {
        let defaults = OpenRouterConfig::default();
        OpenRouterConfig {
            model: self.model.unwrap_or(defaults.model),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            base_url: self.base_url.unwrap_or(defaults.base_url),
        }
    }
}

/// OpenRouter provider for CSV sample analysis.
///
/// # Example
///
/// ```rust,ignore
/// use csv_preview::ai::{OpenRouterProvider, OpenRouterConfig};
///
/// // Simple usage with defaults
/// let provider = OpenRouterProvider::new("your-api-key")?;
///
/// // With custom configuration
/// let config = OpenRouterConfig::builder()
///     .model("openai/gpt-4")
///     .temperature(0.2)
///     .build();
/// let provider = OpenRouterProvider::with_config("your-api-key", config)?;
/// ```
pub struct OpenRouterProvider {
    api_key: String,
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    /// Create a provider with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, OpenRouterConfig::default())
    }

    /// Create a provider with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(api_key: impl Into<String>, config: OpenRouterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            api_key: api_key.into(),
            config,
            client,
        })
    }

    fn call_api(&self, prompt: &str) -> Result<String> {
        let request = OpenRouterRequest {
            model: self.config.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", "csv-preview")
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "OpenRouter API Error {}: {}",
                response.status(),
                response.text()?
            ));
        }

        let result: OpenRouterResponse = response.json()?;
        extract_content(result)
    }
}

/// Text of the first choice, if it carries any.
fn extract_content(response: OpenRouterResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .flatten()
        .next()
        .and_then(|choice| choice.message)
        .map(|msg| msg.content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| anyhow!("No response content from OpenRouter API"))
}

impl AnalysisProvider for OpenRouterProvider {
    fn analyze(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.config.model, "Calling OpenRouter");
        self.call_api(prompt)
    }

    fn name(&self) -> &str {
        "OpenRouter"
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Response parsing tests
    // -------------------------------------------------------------------------

    fn parse(json: &str) -> OpenRouterResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_content_from_valid_response() {
        let response = parse(
            r#"{
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": "  The file lists monthly sales per region.\n"
                    }
                }]
            }"#,
        );

        assert_eq!(
            extract_content(response).unwrap(),
            "The file lists monthly sales per region."
        );
    }

    #[test]
    fn test_extract_content_uses_first_choice() {
        let response = parse(
            r#"{"choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]}"#,
        );
        assert_eq!(extract_content(response).unwrap(), "first");
    }

    #[test]
    fn test_empty_or_missing_content_is_an_error() {
        assert!(extract_content(parse(r#"{"choices": []}"#)).is_err());
        assert!(extract_content(parse(r#"{"choices": null}"#)).is_err());
        assert!(extract_content(parse(r#"{"choices": [{"message": null}]}"#)).is_err());
        assert!(
            extract_content(parse(
                r#"{"choices": [{"message": {"role": "assistant", "content": "   "}}]}"#
            ))
            .is_err()
        );
    }

    #[test]
    fn test_parse_malformed_json() {
        let json = r#"{"choices": [{"message": "not an object"}]}"#;

        let result: std::result::Result<OpenRouterResponse, _> = serde_json::from_str(json);
        // This should fail because message should be an object, not a string
        assert!(result.is_err());
    }

    // -------------------------------------------------------------------------
    // Config builder tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_config_builder_defaults() {
        let config = OpenRouterConfig::builder().build();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_builder_custom_values() {
        let config = OpenRouterConfig::builder()
            .model("openai/gpt-4")
            .temperature(0.5)
            .max_tokens(200)
            .timeout_secs(10)
            .base_url("https://custom.api.com")
            .build();

        assert_eq!(config.model, "openai/gpt-4");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_tokens, 200);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.base_url, "https://custom.api.com");
    }

    // -------------------------------------------------------------------------
    // Provider trait implementation tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_provider_name_and_model() {
        let provider = OpenRouterProvider::new("test-key").unwrap();
        assert_eq!(provider.name(), "OpenRouter");
        assert_eq!(provider.model(), Some(DEFAULT_MODEL));

        let config = OpenRouterConfig::builder().model("custom-model").build();
        let provider = OpenRouterProvider::with_config("test-key", config).unwrap();
        assert_eq!(provider.model(), Some("custom-model"));
    }

    #[test]
    fn test_unreachable_endpoint_fails() {
        // Port 9 (discard) on localhost is not an HTTP server
        let config = OpenRouterConfig::builder()
            .base_url("http://127.0.0.1:9/chat/completions")
            .timeout_secs(2)
            .build();
        let provider = OpenRouterProvider::with_config("test-key", config).unwrap();
        assert!(provider.analyze("hello").is_err());
    }
}
