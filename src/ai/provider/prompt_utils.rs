//! Prompt building utilities for LLM providers.

use serde_json::Value;

const SYSTEM_ROLE: &str = "You are an SEO assistant that answers with structured data.";

/// Build a system prompt carrying the response schema.
///
/// Used by chat-style providers whose schema support is advisory.
/// Returns a JSON-only instruction without a schema if `schema` is null.
pub fn build_system_prompt(schema: &Value) -> String {
    if schema.is_null() {
        return format!("{} Always respond with valid JSON.", SYSTEM_ROLE);
    }

    let schema_str = serde_json::to_string_pretty(schema).unwrap_or_default();
    format!(
        "{} Always respond with valid JSON matching this schema:\n\n```json\n{}\n```\n\nRespond ONLY with valid JSON, no explanation.",
        SYSTEM_ROLE, schema_str
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_system_prompt_null_schema() {
        let result = build_system_prompt(&Value::Null);
        assert!(result.contains("valid JSON"));
        assert!(!result.contains("schema"));
    }

    #[test]
    fn test_system_prompt_with_schema() {
        let schema = json!({"type": "object", "properties": {"title": {"type": "string"}}});
        let result = build_system_prompt(&schema);

        assert!(result.contains("schema"));
        assert!(result.contains("\"title\""));
        assert!(result.ends_with("no explanation."));
    }
}
