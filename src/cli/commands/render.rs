//! Render Command
//!
//! Re-renders a previously exported JSON result without calling the service.
//!
//! Usage:
//!   metafixer render seo-meta-tags.json [--tab html] [--export txt]

use std::fs;
use std::path::Path;

use super::{ViewOptions, present};
use crate::cli::ui::{Output, OutputFormat};
use crate::cli::util::{CommandContext, ConfigOverrides};
use crate::session::GeneratedResult;
use crate::types::{AnalysisResult, Result};

pub fn run(path: &Path, overrides: &ConfigOverrides, view: ViewOptions) -> Result<()> {
    let ctx = CommandContext::load(overrides)?;
    let output = match view.format {
        OutputFormat::Text => Output::new(),
        OutputFormat::Json => Output::quiet(),
    };

    let generated = load_result(path)?;
    present(&generated, view, ctx.output_dir(), ctx.messages(), &output)
}

/// Read an exported result file
pub fn load_result(path: &Path) -> Result<GeneratedResult> {
    let json = fs::read_to_string(path)?;
    let data = AnalysisResult::from_json_str(&json)?;
    Ok(GeneratedResult::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ExportFormat, write_export};
    use crate::types::RawScore;
    use tempfile::TempDir;

    #[test]
    fn test_load_exported_result() {
        let dir = TempDir::new().unwrap();
        let original = AnalysisResult {
            title: "Tea & Biscuits".to_string(),
            score: RawScore::from_int(91),
            ..Default::default()
        };
        let path = write_export(dir.path(), &original, ExportFormat::Json).unwrap();

        let loaded = load_result(&path).unwrap();
        assert_eq!(loaded.data, original);
        assert!(loaded.html.contains("Tea &amp; Biscuits"));
    }

    #[test]
    fn test_load_rejects_non_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seo-meta-tags.txt");
        fs::write(&path, "Title: x").unwrap();
        assert!(load_result(&path).is_err());
    }
}
