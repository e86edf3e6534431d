//! AI Integration Layer
//!
//! Provider abstraction, prompt construction, the declared response schema
//! and response validation for the analysis call.

pub mod prompt;
pub mod provider;
pub mod schema;
pub mod validation;

pub use prompt::{PromptBuilder, PromptSection, analysis_prompt};
pub use provider::{
    GeminiProvider, LlmProvider, LlmResponse, OpenAiProvider, ProviderConfig, ResponseMetadata,
    ResponseTiming, SharedProvider, TokenUsage, create_provider, credential_env_vars,
};
pub use schema::analysis_result_schema;
pub use validation::{FenceKind, parse_analysis_response, strip_code_fence};
