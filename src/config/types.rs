//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/metafixer/) and project (.metafixer/) level configuration.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::ai::provider::{ProviderConfig, credential_env_vars};
use crate::constants::{network, provider};
use crate::types::{MetaError, Result, UiLanguage};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Terminal presentation settings
    pub ui: UiConfig,

    /// Export settings
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            ui: UiConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `MetaError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(MetaError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(MetaError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.llm.provider.as_str(), provider::GEMINI | provider::OPENAI) {
            return Err(MetaError::Config(format!(
                "Unknown LLM provider '{}'. Supported: gemini, openai",
                self.llm.provider
            )));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: "gemini" or "openai"
    pub provider: String,

    /// Model name, provider default when unset
    pub model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature
    pub temperature: f32,

    /// Custom API endpoint (OpenAI-compatible servers, proxies)
    pub api_base: Option<String>,

    /// API key. Never written back out by `config show`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: provider::GEMINI.to_string(),
            model: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: 0.2,
            api_base: None,
            api_key: None,
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl LlmConfig {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
            temperature: self.temperature,
            api_base: self.api_base.clone(),
        }
    }

    /// Resolve the credential: `api_key` first, then the provider's
    /// conventional environment variables. Blank values count as absent.
    pub fn resolve_credential(&self) -> Option<SecretString> {
        self.resolve_credential_with(|name| env::var(name).ok())
    }

    fn resolve_credential_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<SecretString> {
        let non_blank = |value: String| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        self.api_key
            .clone()
            .and_then(non_blank)
            .or_else(|| {
                credential_env_vars(&self.provider)
                    .iter()
                    .find_map(|name| lookup(name).and_then(non_blank))
            })
            .map(SecretString::from)
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Language for tips and terminal messages
    pub language: UiLanguage,
}

// =============================================================================
// Export Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory export files are written to
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.ui.language, UiLanguage::En);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.llm.temperature = 2.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.provider = "claude".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_takes_precedence() {
        let llm = LlmConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        let key = llm
            .resolve_credential_with(lookup(&[("GEMINI_API_KEY", "from-env")]))
            .unwrap();
        assert_eq!(key.expose_secret(), "from-config");
    }

    #[test]
    fn test_env_fallback_order() {
        let llm = LlmConfig::default();
        let key = llm
            .resolve_credential_with(lookup(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "gem")]))
            .unwrap();
        assert_eq!(key.expose_secret(), "gem");

        let key = llm
            .resolve_credential_with(lookup(&[("API_KEY", "generic")]))
            .unwrap();
        assert_eq!(key.expose_secret(), "generic");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let llm = LlmConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(
            llm.resolve_credential_with(lookup(&[("GEMINI_API_KEY", "")]))
                .is_none()
        );
    }

    #[test]
    fn test_openai_ignores_gemini_vars() {
        let llm = LlmConfig {
            provider: "openai".to_string(),
            ..Default::default()
        };
        assert!(
            llm.resolve_credential_with(lookup(&[("GEMINI_API_KEY", "gem")]))
                .is_none()
        );
        assert!(
            llm.resolve_credential_with(lookup(&[("OPENAI_API_KEY", "sk-1")]))
                .is_some()
        );
    }

    #[test]
    fn test_api_key_never_serialized_or_debugged() {
        let config = Config {
            llm: LlmConfig {
                api_key: Some("super-secret".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(!toml.contains("super-secret"));
        assert!(!toml.contains("api_key"));
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
