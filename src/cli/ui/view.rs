//! Result Views
//!
//! Terminal rendering of a generated result, one section per tab:
//! meta fields, HTML markup, keyword buckets, and the score with tips.

use console::style;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::i18n::Messages;
use crate::render::ScoreReport;
use crate::session::GeneratedResult;
use crate::types::{AnalysisResult, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    Meta,
    Html,
    Keywords,
    Score,
    #[default]
    All,
}

impl FromStr for ViewTab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meta" => Ok(ViewTab::Meta),
            "html" => Ok(ViewTab::Html),
            "keywords" => Ok(ViewTab::Keywords),
            "score" => Ok(ViewTab::Score),
            "all" => Ok(ViewTab::All),
            _ => Err(format!(
                "Invalid tab '{}'. Valid values: meta, html, keywords, score, all",
                s
            )),
        }
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewTab::Meta => "meta",
            ViewTab::Html => "html",
            ViewTab::Keywords => "keywords",
            ViewTab::Score => "score",
            ViewTab::All => "all",
        };
        f.write_str(name)
    }
}

/// stdout format for the rendered result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format '{}'. Valid values: text, json", s)),
        }
    }
}

/// Render the selected tab(s) as styled text
pub fn render_view(generated: &GeneratedResult, tab: ViewTab, messages: &Messages) -> String {
    let data = &generated.data;
    let mut sections = Vec::new();

    if matches!(tab, ViewTab::Meta | ViewTab::All) {
        sections.push(meta_section(data, messages));
    }
    if matches!(tab, ViewTab::Html | ViewTab::All) {
        sections.push(section(messages.tab_html, &generated.html));
    }
    if matches!(tab, ViewTab::Keywords | ViewTab::All) {
        sections.push(keywords_section(data, messages));
    }
    if matches!(tab, ViewTab::Score | ViewTab::All) {
        sections.push(score_section(data, messages));
    }

    sections.join("\n\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    result: &'a AnalysisResult,
    html: &'a str,
    score: ScoreReport,
    generated_at: String,
}

/// Machine-readable view: the raw result plus derived markup and score
pub fn render_json(generated: &GeneratedResult) -> Result<String> {
    let view = JsonView {
        result: &generated.data,
        html: &generated.html,
        score: ScoreReport::from_result(&generated.data),
        generated_at: generated.timestamp.to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

fn section(title: &str, body: &str) -> String {
    format!("{}\n{}\n{}", style(title).bold(), "─".repeat(40), body)
}

fn meta_section(data: &AnalysisResult, messages: &Messages) -> String {
    let mut lines = vec![
        format!("{:<12} {}", "Title:", data.title),
        format!("{:<12} {}", "Description:", data.description),
        format!("{:<12} {}", "Keywords:", data.keywords_joined()),
        format!("{:<12} {}", "Robots:", data.robots),
    ];
    if !data.author.is_empty() {
        lines.push(format!("{:<12} {}", "Author:", data.author));
    }
    section(messages.tab_meta, &lines.join("\n"))
}

fn keywords_section(data: &AnalysisResult, messages: &Messages) -> String {
    let detailed = &data.keywords_detailed;
    let buckets = [
        (messages.keywords_primary, &detailed.primary),
        (messages.keywords_secondary, &detailed.secondary),
        (messages.keywords_long_tail, &detailed.long_tail),
    ];

    let body = buckets
        .iter()
        .map(|(heading, words)| {
            let list = if words.is_empty() {
                "-".to_string()
            } else {
                words.join(", ")
            };
            format!("{}\n  {}", style(heading).cyan(), list)
        })
        .collect::<Vec<_>>()
        .join("\n");

    section(messages.tab_keywords, &body)
}

fn score_section(data: &AnalysisResult, messages: &Messages) -> String {
    let report = ScoreReport::from_result(data);
    let grade = messages.grade(report.grade);
    let mut lines = vec![format!(
        "{}: {}/100 ({})",
        messages.score_title,
        style(report.score).bold(),
        grade
    )];

    lines.push(String::new());
    lines.push(style(messages.tips_title).bold().to_string());
    if report.tips.is_empty() {
        lines.push(format!("  {}", messages.no_tips));
    } else {
        lines.extend(
            report
                .tips
                .iter()
                .enumerate()
                .map(|(i, tip)| format!("  {}. {}", i + 1, tip)),
        );
    }

    section(messages.tab_score, &lines.join("\n"))
}
