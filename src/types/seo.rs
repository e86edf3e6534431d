//! SEO Result Types
//!
//! The fixed-shape record extracted from the analysis service, plus the
//! UI language that steers the advisory text inside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// UI Language
// =============================================================================

/// Language of advisory text (tips) and of the terminal messages.
///
/// Independent of the language the analyzed content is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    #[default]
    En,
    Bn,
}

impl UiLanguage {
    /// Natural-language name used inside prompts
    pub fn natural_name(&self) -> &'static str {
        match self {
            UiLanguage::En => "English",
            UiLanguage::Bn => "Bengali",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UiLanguage::En => "en",
            UiLanguage::Bn => "bn",
        }
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UiLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(UiLanguage::En),
            "bn" => Ok(UiLanguage::Bn),
            _ => Err(format!("Unknown UI language: {}. Valid values: en, bn", s)),
        }
    }
}

// =============================================================================
// Analysis Result
// =============================================================================

/// Score exactly as reported by the service.
///
/// The service may omit the field or send a non-numeric value; the raw JSON
/// is kept so the presentation layer decides how to show it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScore(pub Value);

impl RawScore {
    pub fn from_int(score: i64) -> Self {
        Self(Value::from(score))
    }

    /// Numeric value if the service sent a finite number
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64().filter(|v| v.is_finite())
    }
}

/// Explicit `null` reads as the empty value, same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keyword buckets; no uniqueness constraint across buckets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordsDetailed {
    #[serde(deserialize_with = "null_as_default")]
    pub primary: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub long_tail: Vec<String>,
}

/// Structured result of one analysis call.
///
/// Missing or `null` fields deserialize to empty values. A field with the
/// wrong JSON type is a parse error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub robots: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    pub score: RawScore,
    #[serde(deserialize_with = "null_as_default")]
    pub tips: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords_detailed: KeywordsDetailed,
}

impl AnalysisResult {
    /// Parse a bare JSON document (no fence handling)
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Flat keyword list joined the way meta tags expect it
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_language_parse() {
        assert_eq!("en".parse::<UiLanguage>().unwrap(), UiLanguage::En);
        assert_eq!(" BN ".parse::<UiLanguage>().unwrap(), UiLanguage::Bn);
        assert!("fr".parse::<UiLanguage>().is_err());
        assert_eq!(UiLanguage::Bn.natural_name(), "Bengali");
        assert_eq!(UiLanguage::En.to_string(), "en");
    }

    #[test]
    fn test_camel_case_keys() {
        let json = r#"{
            "title": "T",
            "keywordsDetailed": {"primary": ["a"], "secondary": [], "longTail": ["a b c"]}
        }"#;
        let result = AnalysisResult::from_json_str(json).unwrap();
        assert_eq!(result.keywords_detailed.primary, vec!["a"]);
        assert_eq!(result.keywords_detailed.long_tail, vec!["a b c"]);

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("keywordsDetailed").is_some());
        assert!(value["keywordsDetailed"].get("longTail").is_some());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result = AnalysisResult::from_json_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(result.title, "Only a title");
        assert_eq!(result.author, "");
        assert!(result.keywords.is_empty());
        assert_eq!(result.score, RawScore::default());
        assert!(result.keywords_detailed.secondary.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let result = AnalysisResult::from_json_str(
            r#"{"title": "T", "author": null, "tips": null, "keywords": ["a"],
                "keywordsDetailed": {"primary": null, "secondary": ["b"], "longTail": null}}"#,
        )
        .unwrap();
        assert_eq!(result.title, "T");
        assert_eq!(result.author, "");
        assert!(result.tips.is_empty());
        assert_eq!(result.keywords, vec!["a"]);
        assert!(result.keywords_detailed.primary.is_empty());
        assert_eq!(result.keywords_detailed.secondary, vec!["b"]);
        assert!(result.keywords_detailed.long_tail.is_empty());

        let result = AnalysisResult::from_json_str(r#"{"title": "T", "keywordsDetailed": null}"#)
            .unwrap();
        assert_eq!(result.keywords_detailed, KeywordsDetailed::default());
    }

    #[test]
    fn test_non_numeric_score_is_kept_raw() {
        let result = AnalysisResult::from_json_str(r#"{"score": "high"}"#).unwrap();
        assert_eq!(result.score.as_f64(), None);
        assert_eq!(result.score, RawScore(Value::from("high")));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(AnalysisResult::from_json_str(r#"{"keywords": "coffee"}"#).is_err());
    }

    #[test]
    fn test_pretty_json_round_trip() {
        let result = AnalysisResult {
            title: "Organic Coffee Beans Online".to_string(),
            description: "Fresh beans".to_string(),
            keywords: vec!["coffee".to_string(), "organic".to_string()],
            robots: "index, follow".to_string(),
            author: String::new(),
            score: RawScore::from_int(72),
            tips: vec!["Add more content".to_string()],
            keywords_detailed: KeywordsDetailed {
                primary: vec!["coffee".to_string()],
                secondary: vec!["organic beans".to_string()],
                long_tail: vec!["buy organic coffee online".to_string()],
            },
        };

        let json = result.to_pretty_json().unwrap();
        assert!(json.contains("\n  \"title\""));
        assert_eq!(AnalysisResult::from_json_str(&json).unwrap(), result);
    }
}
