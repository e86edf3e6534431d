//! LLM Provider Abstraction
//!
//! Defines the `LlmProvider` capability used by the analysis client:
//! submit a prompt with a response schema and a credential, get text back.
//! Providers never parse the text; that is the client's job.

mod gemini;
mod openai;
mod prompt_utils;

pub use gemini::{GeminiProvider, to_gemini_schema};
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{network, provider as defaults};
use crate::types::{MetaError, Result, TransportError};

// =============================================================================
// LLM Response with Usage Metrics
// =============================================================================

/// Raw provider response: the text payload plus call metrics
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Text payload, `None` when the service returned no text at all
    pub text: Option<String>,
    /// Token usage metrics
    pub usage: TokenUsage,
    /// Response timing
    pub timing: ResponseTiming,
    /// Provider and model info
    pub metadata: ResponseMetadata,
}

impl LlmResponse {
    /// Create response with text only (usage unknown)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Response that carried no text payload
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Token usage metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Response timing metrics
#[derive(Debug, Clone, Default)]
pub struct ResponseTiming {
    /// Total response time in milliseconds (wall clock)
    pub total_ms: u64,
}

impl ResponseTiming {
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            total_ms: duration.as_millis() as u64,
        }
    }
}

/// Response metadata
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    /// Model used
    pub model: String,
    /// Provider name
    pub provider: String,
}

/// Shared provider handle; the analysis client holds one of these.
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for LLM providers.
///
/// Holds no credential: credentials are resolved separately and handed to
/// each `submit` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider type: "gemini", "openai"
    pub provider: String,
    /// Model name (provider-specific)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature
    pub temperature: f32,
    /// API base URL (for custom endpoints)
    #[serde(default)]
    pub api_base: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: defaults::GEMINI.to_string(),
            model: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: 0.2,
            api_base: None,
        }
    }
}

impl ProviderConfig {
    /// Build the shared reqwest client used by HTTP providers
    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(network::CONNECTION_TIMEOUT_SECS))
            .build()
            .map_err(|e| MetaError::Config(format!("Failed to create HTTP client: {}", e)))
    }

    /// Resolve and validate the API base URL, falling back to `default`.
    ///
    /// Only http/https are accepted; a trailing slash is removed.
    pub(crate) fn resolve_api_base(&self, default: &str) -> Result<String> {
        let raw = self.api_base.as_deref().unwrap_or(default);
        let url = url::Url::parse(raw)
            .map_err(|e| MetaError::Config(format!("Invalid API base URL '{}': {}", raw, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(MetaError::Config(format!(
                "API base URL must use http or https scheme, got: {}",
                url.scheme()
            )));
        }

        let mut result = url.to_string();
        if result.ends_with('/') {
            result.pop();
        }
        Ok(result)
    }
}

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// Generative text capability: `submit(prompt, schema, credential) → text`
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt with a declared response schema.
    ///
    /// Returns whatever text the service produced, unparsed. Transport and
    /// HTTP failures are reported as `TransportError`.
    async fn submit(
        &self,
        prompt: &str,
        schema: &Value,
        credential: &SecretString,
    ) -> std::result::Result<LlmResponse, TransportError>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Environment variables consulted for a provider's credential, in order
pub fn credential_env_vars(provider: &str) -> &'static [&'static str] {
    match provider {
        defaults::GEMINI => defaults::GEMINI_KEY_VARS,
        defaults::OPENAI => defaults::OPENAI_KEY_VARS,
        _ => &[],
    }
}

/// Create a shared provider from configuration
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        defaults::GEMINI => Ok(Arc::new(GeminiProvider::new(config.clone())?)),
        defaults::OPENAI => Ok(Arc::new(OpenAiProvider::new(config.clone())?)),
        _ => Err(MetaError::Config(format!(
            "Unknown provider: {}. Supported: gemini, openai",
            config.provider
        ))),
    }
}
