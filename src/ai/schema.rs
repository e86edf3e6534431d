//! Response Schema for the Analysis Call
//!
//! Declares the `AnalysisResult` shape to the service. All objects carry
//! `additionalProperties: false` and list every field as required so strict
//! structured-output modes accept the schema. Providers convert it to their
//! own dialect where needed.

use serde_json::{Value, json};

fn string_array(description: &str) -> Value {
    json!({
        "type": "array",
        "description": description,
        "items": {"type": "string"}
    })
}

/// JSON schema for `AnalysisResult`
pub fn analysis_result_schema() -> Value {
    json!({
        "type": "object",
        "description": "SEO meta tags, keyword buckets, score and tips for a piece of content",
        "required": [
            "title", "description", "keywords", "robots",
            "author", "score", "tips", "keywordsDetailed"
        ],
        "additionalProperties": false,
        "properties": {
            "title": {"type": "string", "description": "SEO title, about 50-60 characters"},
            "description": {"type": "string", "description": "Meta description, about 150-160 characters"},
            "keywords": string_array("Mixed keywords"),
            "robots": {"type": "string", "description": "Robots directive, usually 'index, follow'"},
            "author": {"type": "string", "description": "Inferred author name or empty"},
            "score": {"type": "integer", "description": "SEO readiness from 0 to 100"},
            "tips": string_array("Actionable advice in the UI language"),
            "keywordsDetailed": {
                "type": "object",
                "required": ["primary", "secondary", "longTail"],
                "additionalProperties": false,
                "properties": {
                    "primary": string_array("Main topics"),
                    "secondary": string_array("Related terms"),
                    "longTail": string_array("Long-tail phrases")
                }
            }
        }
    })
}
