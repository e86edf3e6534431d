//! Result Export
//!
//! Two file formats derived from one result: pretty JSON and a plain-text
//! summary followed by the generated markup.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use super::meta_tags::generate_html;
use crate::constants::export::FILE_STEM;
use crate::types::{AnalysisResult, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Txt => "text/plain",
        }
    }

    /// `seo-meta-tags.json` / `seo-meta-tags.txt`
    pub fn file_name(&self) -> String {
        format!("{}.{}", FILE_STEM, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" => Ok(ExportFormat::Txt),
            _ => Err(format!(
                "Unknown export format: {}. Valid values: json, txt",
                s
            )),
        }
    }
}

/// Plain-text summary: title, description, keywords, then the markup
pub fn text_summary(result: &AnalysisResult) -> String {
    format!(
        "Title: {}\nDescription: {}\nKeywords: {}\n\nHTML Code:\n{}",
        result.title,
        result.description,
        result.keywords_joined(),
        generate_html(result)
    )
}

/// Render a result in the given format
pub fn render_export(result: &AnalysisResult, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(result.to_pretty_json()?),
        ExportFormat::Txt => Ok(text_summary(result)),
    }
}

/// Write the export into `dir` under its standard file name.
///
/// Creates `dir` if needed and overwrites an existing export.
pub fn write_export(dir: &Path, result: &AnalysisResult, format: ExportFormat) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());
    fs::write(&path, render_export(result, format)?)?;
    info!("Exported {} to {}", format.mime_type(), path.display());
    Ok(path)
}
