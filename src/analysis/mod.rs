//! Analysis Client
//!
//! The one component that talks to the generative text service:
//!
//! 1. reject empty input and unresolved credentials before any call
//! 2. truncate content and build the instruction
//! 3. submit with the declared `AnalysisResult` schema
//! 4. strip fencing and parse the returned text
//!
//! The client keeps no mutable state; concurrent `analyze` calls are
//! independent.

use secrecy::SecretString;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ai::{
    SharedProvider, analysis_prompt, analysis_result_schema, credential_env_vars,
    parse_analysis_response,
};
use crate::constants::request::MAX_CONTENT_CHARS;
use crate::types::{AnalysisError, AnalysisResult, UiLanguage};

// =============================================================================
// Request
// =============================================================================

/// Inputs to one analysis call, with content already truncated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    content: String,
    language: UiLanguage,
    truncated: bool,
}

impl AnalysisRequest {
    /// Build a request, rejecting blank content.
    pub fn new(content: &str, language: UiLanguage) -> Result<Self, AnalysisError> {
        if content.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let (content, truncated) = truncate_chars(content, MAX_CONTENT_CHARS);
        Ok(Self {
            content: content.to_string(),
            language,
            truncated,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> UiLanguage {
        self.language
    }

    /// Whether the original content exceeded the character limit
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Instruction text sent to the service
    pub fn prompt(&self) -> String {
        analysis_prompt(&self.content, self.language)
    }
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

// =============================================================================
// Client
// =============================================================================

/// Client for the SEO analysis call
pub struct AnalysisClient {
    provider: SharedProvider,
    credential: Option<SecretString>,
    schema: Value,
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("provider", &self.provider.name())
            .field("model", &self.provider.model())
            .field("credential", &self.credential.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AnalysisClient {
    /// Create a client. A `None` credential makes every `analyze` call fail
    /// with `MissingCredential` without touching the network.
    pub fn new(provider: SharedProvider, credential: Option<SecretString>) -> Self {
        Self {
            provider,
            credential,
            schema: analysis_result_schema(),
        }
    }

    /// Run one analysis.
    pub async fn analyze(
        &self,
        content: &str,
        language: UiLanguage,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest::new(content, language)?;
        self.analyze_request(&request).await
    }

    /// Run one analysis for a prepared request.
    pub async fn analyze_request(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        let credential = self.credential.as_ref().ok_or_else(|| {
            let provider = self.provider.name();
            AnalysisError::MissingCredential {
                provider: provider.to_string(),
                hint: credential_env_vars(provider).join(" or "),
            }
        })?;

        if request.was_truncated() {
            warn!(
                "Content exceeds {} characters; only the first {} are analyzed",
                MAX_CONTENT_CHARS, MAX_CONTENT_CHARS
            );
        }

        info!(
            "Analyzing {} characters (ui language: {}, provider: {}, model: {})",
            request.content().chars().count(),
            request.language(),
            self.provider.name(),
            self.provider.model()
        );

        let prompt = request.prompt();
        let response = self
            .provider
            .submit(&prompt, &self.schema, credential)
            .await?;

        debug!(
            "Response from {}/{} in {}ms ({} tokens: {} input / {} output)",
            response.metadata.provider,
            response.metadata.model,
            response.timing.total_ms,
            response.usage.total(),
            response.usage.input_tokens,
            response.usage.output_tokens
        );

        parse_analysis_response(response.text.as_deref(), self.provider.name())
    }
}
