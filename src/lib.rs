//! metafixer - AI-Assisted SEO Meta Tag Generator
//!
//! Sends arbitrary text to a generative language service and turns the
//! structured reply into meta tags, keyword buckets and an SEO readiness
//! score.
//!
//! ## Quick Start
//!
//! ```ignore
//! use metafixer::{AnalysisClient, ProviderConfig, UiLanguage, create_provider, generate_html};
//!
//! let provider = create_provider(&ProviderConfig::default())?;
//! let client = AnalysisClient::new(provider, Some(api_key));
//! let result = client.analyze("Buy organic coffee beans online.", UiLanguage::En).await?;
//! println!("{}", generate_html(&result));
//! ```
//!
//! ## Modules
//!
//! - [`analysis`]: the analysis client (request shaping, submit, parse)
//! - [`ai`]: provider abstraction, prompt, response schema, validation
//! - [`render`]: meta tag markup, score presentation, export
//! - [`session`]: busy flag and stale-response guard around the client
//! - [`config`]: layered configuration and credential resolution

pub mod ai;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod i18n;
pub mod render;
pub mod session;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{AnalysisError, FailureKind, MetaError, Result};

// Data Model
pub use types::{AnalysisResult, KeywordsDetailed, RawScore, UiLanguage};

// =============================================================================
// Analysis Re-exports
// =============================================================================

pub use analysis::{AnalysisClient, AnalysisRequest};
pub use session::{AnalysisSession, GeneratedResult};

pub use ai::{LlmProvider, LlmResponse, ProviderConfig, SharedProvider, create_provider};

pub use render::{ExportFormat, ScoreReport, generate_html, write_export};
