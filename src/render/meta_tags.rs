//! Meta Tag Markup
//!
//! Pure, order-fixed derivation of HTML head markup from a result:
//! title, description, keywords, robots, optional author, then the generic
//! social-sharing title and description.

use crate::types::AnalysisResult;

/// Escape text for use inside a double-quoted attribute or element body
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn named(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">",
        name,
        escape_html(content)
    )
}

fn property(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{}\" content=\"{}\">",
        property,
        escape_html(content)
    )
}

/// Markup lines in their fixed order
pub fn meta_tag_lines(result: &AnalysisResult) -> Vec<String> {
    let mut tags = vec![
        format!("<title>{}</title>", escape_html(&result.title)),
        named("description", &result.description),
        named("keywords", &result.keywords_joined()),
        named("robots", &result.robots),
    ];

    if !result.author.is_empty() {
        tags.push(named("author", &result.author));
    }

    tags.push(property("og:title", &result.title));
    tags.push(property("og:description", &result.description));
    tags
}

/// Markup block, one tag per line
pub fn generate_html(result: &AnalysisResult) -> String {
    meta_tag_lines(result).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            title: "Organic Coffee Beans Online".to_string(),
            description: "Fresh organic beans".to_string(),
            keywords: vec!["coffee".to_string(), "organic".to_string()],
            robots: "index, follow".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_order_without_author() {
        let lines = meta_tag_lines(&sample());
        assert_eq!(
            lines,
            vec![
                "<title>Organic Coffee Beans Online</title>",
                "<meta name=\"description\" content=\"Fresh organic beans\">",
                "<meta name=\"keywords\" content=\"coffee, organic\">",
                "<meta name=\"robots\" content=\"index, follow\">",
                "<meta property=\"og:title\" content=\"Organic Coffee Beans Online\">",
                "<meta property=\"og:description\" content=\"Fresh organic beans\">",
            ]
        );
    }

    #[test]
    fn test_author_goes_after_robots() {
        let result = AnalysisResult {
            author: "Jane Roaster".to_string(),
            ..sample()
        };
        let lines = meta_tag_lines(&result);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[4], "<meta name=\"author\" content=\"Jane Roaster\">");
        assert!(lines[5].contains("og:title"));
    }

    #[test]
    fn test_values_are_escaped() {
        let result = AnalysisResult {
            title: "Beans & \"Brews\" <Best>".to_string(),
            ..sample()
        };
        let html = generate_html(&result);
        assert!(html.starts_with("<title>Beans &amp; &quot;Brews&quot; &lt;Best&gt;</title>"));
        assert!(html.contains("content=\"Beans &amp; &quot;Brews&quot; &lt;Best&gt;\""));
    }

    #[test]
    fn test_html_is_newline_joined() {
        let html = generate_html(&sample());
        assert_eq!(html.lines().count(), 6);
        assert!(!html.ends_with('\n'));
    }

    #[test]
    fn test_empty_keywords() {
        let result = AnalysisResult {
            keywords: Vec::new(),
            ..sample()
        };
        assert!(generate_html(&result).contains("<meta name=\"keywords\" content=\"\">"));
    }
}
