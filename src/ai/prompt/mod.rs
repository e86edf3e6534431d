//! Prompt Builder System
//!
//! Standardized prompt construction for the analysis call.
//!
//! The analysis prompt keeps two language choices apart: advisory text
//! follows the UI language, generated meta content follows the language of
//! the content itself (detected by the service).

use crate::types::UiLanguage;

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Role definition with expertise area
    Role { expertise: String, task: String },
    /// Numbered objectives
    Objectives(Vec<String>),
    /// Raw text section with optional header
    Text {
        header: Option<String>,
        content: String,
    },
    /// Verbatim user content between triple-quote markers
    Quoted { label: String, content: String },
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role definition section
    pub fn role(mut self, expertise: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            expertise: expertise.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add objectives section
    pub fn objectives<S: Into<String>>(mut self, objectives: Vec<S>) -> Self {
        self.sections.push(PromptSection::Objectives(
            objectives.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add text section
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Add text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    /// Add verbatim content wrapped in `"""` markers
    pub fn quoted(mut self, label: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Quoted {
            label: label.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Role { expertise, task } => {
                    prompt.push_str(&format!(
                        "You are an expert {} specializing in {}.\n\n",
                        expertise, task
                    ));
                }
                PromptSection::Objectives(objectives) => {
                    for (i, obj) in objectives.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, obj));
                    }
                    prompt.push('\n');
                }
                PromptSection::Text { header, content } => {
                    if let Some(h) = header {
                        prompt.push_str(&format!("# {}\n\n", h));
                    }
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
                PromptSection::Quoted { label, content } => {
                    prompt.push_str(&format!("{}:\n\"\"\"\n", label));
                    prompt.push_str(&content);
                    prompt.push_str("\n\"\"\"\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// Build the SEO analysis instruction.
///
/// `content` must already be truncated; it is embedded verbatim.
pub fn analysis_prompt(content: &str, language: UiLanguage) -> String {
    let ui_language = language.natural_name();

    PromptBuilder::new()
        .role("SEO analyst", "meta tags and keyword research")
        .text(&format!(
            "Analyze the following text for SEO purposes. The user's UI language is {lang}, \
             so write the analysis tips in {lang}. Keep the generated meta tags (title, \
             description, keywords) in the language the content itself is written in; \
             detect the content language automatically.",
            lang = ui_language
        ))
        .section(
            "Output",
            "Return a valid JSON object with the following structure:",
        )
        .objectives(vec![
            "title: An SEO optimized title (approx 50-60 chars).".to_string(),
            "description: An SEO optimized meta description (approx 150-160 chars).".to_string(),
            "keywords: An array of strings containing mixed keywords.".to_string(),
            "robots: Default to \"index, follow\".".to_string(),
            "author: Infer an author name if possible, otherwise leave blank.".to_string(),
            "score: An integer from 0 to 100 representing SEO readiness based on content \
             depth, keyword usage, and readability."
                .to_string(),
            format!(
                "tips: An array of strings in {} with actionable advice to improve the \
                 content's SEO.",
                ui_language
            ),
            "keywordsDetailed: An object containing three arrays of strings: 'primary' (main \
             topics), 'secondary' (related terms), and 'longTail' (phrases)."
                .to_string(),
        ])
        .quoted("Content to analyze", content)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_prompt() {
        let prompt = PromptBuilder::new()
            .role("SEO analyst", "keyword research")
            .objectives(vec!["Find keywords", "Score content"])
            .build();

        assert!(prompt.contains("expert SEO analyst"));
        assert!(prompt.contains("1. Find keywords"));
        assert!(prompt.contains("2. Score content"));
    }

    #[test]
    fn test_quoted_section_is_verbatim() {
        let content = "line one\n  \"quoted\" line two  ";
        let prompt = PromptBuilder::new().quoted("Content", content).build();
        assert!(prompt.contains(&format!("\"\"\"\n{}\n\"\"\"", content)));
    }

    #[test]
    fn test_analysis_prompt_languages_are_independent() {
        let prompt = analysis_prompt("আমার সোনার বাংলা", UiLanguage::En);
        assert!(prompt.contains("UI language is English"));
        assert!(prompt.contains("tips in English"));
        assert!(prompt.contains("detect the content language automatically"));
        assert!(prompt.contains("আমার সোনার বাংলা"));

        let bengali = analysis_prompt("Buy organic coffee beans online.", UiLanguage::Bn);
        assert!(bengali.contains("UI language is Bengali"));
        assert!(bengali.contains("array of strings in Bengali"));
    }

    #[test]
    fn test_analysis_prompt_lists_every_field() {
        let prompt = analysis_prompt("text", UiLanguage::En);
        for field in [
            "title:",
            "description:",
            "keywords:",
            "robots:",
            "author:",
            "score:",
            "tips:",
            "keywordsDetailed:",
        ] {
            assert!(prompt.contains(field), "missing field {field}");
        }
    }
}
