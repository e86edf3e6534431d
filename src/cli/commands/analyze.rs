//! Analyze Command
//!
//! Generates meta tags, keywords and an SEO score for a piece of text.
//!
//! Usage:
//!   metafixer analyze "TEXT" [--lang bn] [--tab score]
//!   metafixer analyze --file page.txt --export json --output out/
//!   cat page.txt | metafixer analyze --format json

use std::path::PathBuf;

use tracing::warn;

use super::{ViewOptions, present};
use crate::cli::ui::{Output, OutputFormat};
use crate::cli::util::{CommandContext, ConfigOverrides, read_input};
use crate::session::{AnalysisSession, Completion};
use crate::types::Result;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub view: ViewOptions,
}

pub async fn run(options: AnalyzeOptions) -> Result<()> {
    let ctx = CommandContext::load(&options.overrides)?;
    let messages = ctx.messages();
    let output = match options.view.format {
        OutputFormat::Text => Output::new(),
        OutputFormat::Json => Output::quiet(),
    };

    let content = read_input(options.text, options.file.as_deref())?;
    let client = ctx.analysis_client()?;

    let (mut session, ticket) = AnalysisSession::started();

    output.info(messages.analyzing);
    let outcome = client.analyze(&content, ctx.language()).await;

    if session.complete(ticket, &outcome) == Completion::Stale {
        return Ok(());
    }

    if let Err(err) = outcome {
        warn!(kind = %err.kind(), "Analysis failed: {}", err);
        output.error(messages.failure(&err));
        return Err(err.into());
    }

    match session.current() {
        Some(generated) => present(generated, options.view, ctx.output_dir(), messages, &output),
        None => Ok(()),
    }
}
