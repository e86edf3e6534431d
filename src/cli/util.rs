//! CLI Common Utilities
//!
//! Shared configuration loading and input handling for CLI commands.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::ai::create_provider;
use crate::analysis::AnalysisClient;
use crate::config::{Config, ConfigLoader};
use crate::i18n::Messages;
use crate::types::{MetaError, Result, UiLanguage};

/// CLI flags that override loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub language: Option<UiLanguage>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(language) = self.language {
            config.ui.language = language;
        }
        if let Some(provider) = &self.provider {
            config.llm.provider = provider.clone();
            // The configured model belongs to the configured provider
            config.llm.model = None;
        }
        if let Some(model) = &self.model {
            config.llm.model = Some(model.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }
    }
}

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
}

impl CommandContext {
    /// Load configuration, apply overrides, and validate the result
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = ConfigLoader::load()?;
        overrides.apply(&mut config);
        config.validate()?;
        Ok(Self { config })
    }

    pub fn messages(&self) -> &'static Messages {
        Messages::for_language(self.config.ui.language)
    }

    pub fn language(&self) -> UiLanguage {
        self.config.ui.language
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.export.output_dir
    }

    /// Build the analysis client from the configured provider and credential
    pub fn analysis_client(&self) -> Result<AnalysisClient> {
        let provider = create_provider(&self.config.llm.provider_config())?;
        Ok(AnalysisClient::new(
            provider,
            self.config.llm.resolve_credential(),
        ))
    }
}

/// Read analysis input from the argument, a file, or piped stdin.
///
/// Returns an empty string when nothing was given; emptiness is reported
/// by the analysis itself.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => Err(MetaError::Config(
            "Provide either TEXT or --file, not both".to_string(),
        )),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            MetaError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        }),
        (None, None) => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Ok(String::new());
            }
            let mut buffer = String::new();
            stdin.lock().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
