//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Analysis Failure Kinds
//!
//! - **EmptyInput**: nothing to analyze (checked before any call)
//! - **MissingCredential**: no usable API credential (checked before any call)
//! - **TransportFailure**: network or remote API error
//! - **EmptyResponse**: the call succeeded but carried no text
//! - **MalformedResponse**: text present but not parseable as a result
//!
//! None of these are retried automatically. Transport failures carry a
//! category so callers can decide how to retry on their own.

use std::fmt;

use thiserror::Error;

use crate::constants::request::RESPONSE_PREVIEW_CHARS;

// =============================================================================
// Failure Kinds
// =============================================================================

/// Flat tag for an analysis failure, used for logging and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    EmptyInput,
    MissingCredential,
    TransportFailure,
    EmptyResponse,
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "EMPTY_INPUT"),
            Self::MissingCredential => write!(f, "MISSING_CREDENTIAL"),
            Self::TransportFailure => write!(f, "TRANSPORT_FAILURE"),
            Self::EmptyResponse => write!(f, "EMPTY_RESPONSE"),
            Self::MalformedResponse => write!(f, "MALFORMED_RESPONSE"),
        }
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Transport failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCategory {
    /// HTTP 429
    RateLimit,
    /// HTTP 401/403 - credential rejected
    Auth,
    /// HTTP 400 - request rejected as invalid
    BadRequest,
    /// HTTP 404 - model or endpoint not found
    Unavailable,
    /// HTTP 5xx
    Server,
    /// Connection, DNS or timeout before a response arrived
    Network,
    /// Response arrived but its envelope could not be decoded
    Protocol,
    Unknown,
}

impl fmt::Display for TransportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Auth => write!(f, "AUTH"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
            Self::Server => write!(f, "SERVER"),
            Self::Network => write!(f, "NETWORK"),
            Self::Protocol => write!(f, "PROTOCOL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl TransportCategory {
    /// Classify an HTTP status code
    pub fn from_http_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimit,
            401 | 403 => Self::Auth,
            400 => Self::BadRequest,
            404 => Self::Unavailable,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Whether a caller-driven retry could plausibly succeed.
    ///
    /// Informational only: the client never retries by itself.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimit | Self::Server | Self::Network)
    }
}

/// Network or remote API failure with provider context
#[derive(Debug, Clone)]
pub struct TransportError {
    pub category: TransportCategory,
    pub message: String,
    pub provider: String,
    pub status: Option<u16>,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "[{}:{}] HTTP {}: {}",
                self.provider, self.category, status, self.message
            ),
            None => write!(f, "[{}:{}] {}", self.provider, self.category, self.message),
        }
    }
}

impl std::error::Error for TransportError {}

impl TransportError {
    pub fn new(
        category: TransportCategory,
        message: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            provider: provider.into(),
            status: None,
        }
    }

    /// Build from a non-success HTTP status and response body
    pub fn from_http_status(status: u16, body: impl Into<String>, provider: &str) -> Self {
        Self {
            category: TransportCategory::from_http_status(status),
            message: body.into(),
            provider: provider.to_string(),
            status: Some(status),
        }
    }

    /// Build from a reqwest error raised before a usable response existed
    pub fn from_request(err: &reqwest::Error, provider: &str) -> Self {
        let category = if err.is_decode() {
            TransportCategory::Protocol
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            TransportCategory::Network
        } else if let Some(status) = err.status() {
            TransportCategory::from_http_status(status.as_u16())
        } else {
            TransportCategory::Unknown
        };

        Self {
            category,
            message: err.to_string(),
            provider: provider.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

// =============================================================================
// Analysis Error
// =============================================================================

/// Failure of a single analysis attempt
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No content to analyze")]
    EmptyInput,

    #[error("No API credential for {provider}: set {hint} or llm.api_key")]
    MissingCredential { provider: String, hint: String },

    #[error("Transport failure: {0}")]
    Transport(TransportError),

    #[error("Empty response from {provider}")]
    EmptyResponse { provider: String },

    #[error("Malformed response: {source}. Content preview: {preview}")]
    MalformedResponse {
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<TransportError> for AnalysisError {
    fn from(err: TransportError) -> Self {
        AnalysisError::Transport(err)
    }
}

impl AnalysisError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::EmptyInput => FailureKind::EmptyInput,
            Self::MissingCredential { .. } => FailureKind::MissingCredential,
            Self::Transport(_) => FailureKind::TransportFailure,
            Self::EmptyResponse { .. } => FailureKind::EmptyResponse,
            Self::MalformedResponse { .. } => FailureKind::MalformedResponse,
        }
    }

    /// True when the user must supply input; every other kind is an
    /// analysis failure from the user's point of view.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Create a malformed-response error keeping a short preview of the text
    pub fn malformed(text: &str, source: serde_json::Error) -> Self {
        Self::MalformedResponse {
            preview: text.chars().take(RESPONSE_PREVIEW_CHARS).collect(),
            source,
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

impl From<figment::Error> for MetaError {
    fn from(err: figment::Error) -> Self {
        MetaError::Config(format!("Configuration error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, MetaError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::EmptyInput.to_string(), "EMPTY_INPUT");
        assert_eq!(
            FailureKind::MalformedResponse.to_string(),
            "MALFORMED_RESPONSE"
        );
    }

    #[test]
    fn test_classify_http_status() {
        assert_eq!(
            TransportCategory::from_http_status(429),
            TransportCategory::RateLimit
        );
        assert_eq!(
            TransportCategory::from_http_status(403),
            TransportCategory::Auth
        );
        assert_eq!(
            TransportCategory::from_http_status(503),
            TransportCategory::Server
        );
        assert_eq!(
            TransportCategory::from_http_status(404),
            TransportCategory::Unavailable
        );
        assert_eq!(
            TransportCategory::from_http_status(418),
            TransportCategory::Unknown
        );
    }

    #[test]
    fn test_transient_categories() {
        assert!(TransportCategory::RateLimit.is_transient());
        assert!(TransportCategory::Network.is_transient());
        assert!(!TransportCategory::Auth.is_transient());
        assert!(!TransportCategory::BadRequest.is_transient());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::from_http_status(401, "API key not valid", "gemini");
        assert_eq!(
            err.to_string(),
            "[gemini:AUTH] HTTP 401: API key not valid"
        );

        let err = TransportError::new(TransportCategory::Network, "connection reset", "openai");
        assert_eq!(err.to_string(), "[openai:NETWORK] connection reset");
    }

    #[test]
    fn test_analysis_error_kinds() {
        assert_eq!(AnalysisError::EmptyInput.kind(), FailureKind::EmptyInput);
        assert!(AnalysisError::EmptyInput.is_input_error());

        let empty = AnalysisError::EmptyResponse {
            provider: "gemini".to_string(),
        };
        assert_eq!(empty.kind(), FailureKind::EmptyResponse);
        assert!(!empty.is_input_error());

        let transport: AnalysisError =
            TransportError::new(TransportCategory::Server, "boom", "gemini").into();
        assert_eq!(transport.kind(), FailureKind::TransportFailure);
    }

    #[test]
    fn test_malformed_preview_is_bounded() {
        let text = "x".repeat(1000);
        let source = serde_json::from_str::<serde_json::Value>(&text).unwrap_err();
        match AnalysisError::malformed(&text, source) {
            AnalysisError::MalformedResponse { preview, .. } => {
                assert_eq!(preview.chars().count(), 200)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
