pub mod analyze;
pub mod config;
pub mod render;

use std::path::Path;

use crate::cli::ui::{Output, OutputFormat, ViewTab, render_json, render_view};
use crate::i18n::Messages;
use crate::render::{ExportFormat, write_export};
use crate::session::GeneratedResult;
use crate::types::Result;

/// How a generated result is shown and exported
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    pub tab: ViewTab,
    pub format: OutputFormat,
    pub export: Option<ExportFormat>,
}

/// Print the result to stdout and write the export file if requested
pub(crate) fn present(
    generated: &GeneratedResult,
    view: ViewOptions,
    export_dir: &Path,
    messages: &Messages,
    output: &Output,
) -> Result<()> {
    match view.format {
        OutputFormat::Text => println!("{}", render_view(generated, view.tab, messages)),
        OutputFormat::Json => println!("{}", render_json(generated)?),
    }

    if let Some(format) = view.export {
        let path = write_export(export_dir, &generated.data, format)?;
        output.success(&format!("{}: {}", messages.exported, path.display()));
    }

    Ok(())
}
