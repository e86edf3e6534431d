//! Google Gemini Provider
//!
//! Calls the `generateContent` endpoint with a JSON response MIME type and a
//! response schema, so the service is asked for structured output directly.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{debug, info};

use super::{LlmProvider, LlmResponse, ProviderConfig, ResponseMetadata, ResponseTiming, TokenUsage};
use crate::constants::provider as defaults;
use crate::types::{Result, TransportCategory, TransportError};

/// Gemini `generateContent` provider
pub struct GeminiProvider {
    api_base: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_base = config.resolve_api_base(defaults::GEMINI_API_BASE)?;
        let client = config.http_client()?;
        let model = config
            .model
            .unwrap_or_else(|| defaults::GEMINI_DEFAULT_MODEL.to_string());

        Ok(Self {
            api_base,
            model,
            temperature: config.temperature,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn build_request(&self, prompt: &str, schema: &Value) -> GenerateContentRequest {
        let response_schema = if schema.is_null() {
            None
        } else {
            Some(to_gemini_schema(schema))
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        }
    }
}

/// Convert a JSON Schema document to Gemini's OpenAPI schema dialect.
///
/// Type names become upper case and `additionalProperties` is dropped,
/// since the Gemini API rejects it. Everything else is kept as is.
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                match key.as_str() {
                    "additionalProperties" => {}
                    "type" => {
                        let converted = value
                            .as_str()
                            .map(|t| Value::String(t.to_uppercase()))
                            .unwrap_or_else(|| value.clone());
                        out.insert(key.clone(), converted);
                    }
                    _ => {
                        out.insert(key.clone(), to_gemini_schema(value));
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn submit(
        &self,
        prompt: &str,
        schema: &Value,
        credential: &SecretString,
    ) -> std::result::Result<LlmResponse, TransportError> {
        info!(
            "Generating with Gemini (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let start_time = Instant::now();
        let request = self.build_request(prompt, schema);

        debug!("Sending request to Gemini API ({} prompt chars)", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", credential.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::from_request(&e, self.name()))?;

        let elapsed = start_time.elapsed();

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::from_http_status(status, body, self.name()));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            TransportError::new(
                TransportCategory::Protocol,
                format!("Failed to decode Gemini response: {}", e),
                self.name(),
            )
        })?;

        let usage = body
            .usage_metadata
            .as_ref()
            .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        Ok(LlmResponse {
            text: body.first_text(),
            usage,
            timing: ResponseTiming::from_duration(elapsed),
            metadata: ResponseMetadata {
                model: self.model.clone(),
                provider: self.name().to_string(),
            },
        })
    }

    fn name(&self) -> &str {
        defaults::GEMINI
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn first_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(ProviderConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            provider().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_schema_conversion() {
        let schema = json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["tags"],
            "properties": {
                "tags": {"type": "array", "items": {"type": "string"}},
                "score": {"type": "integer"}
            }
        });

        let converted = to_gemini_schema(&schema);
        assert_eq!(converted["type"], "OBJECT");
        assert!(converted.get("additionalProperties").is_none());
        assert_eq!(converted["required"], json!(["tags"]));
        assert_eq!(converted["properties"]["tags"]["type"], "ARRAY");
        assert_eq!(converted["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(converted["properties"]["score"]["type"], "INTEGER");
    }

    #[test]
    fn test_request_shape() {
        let request = provider().build_request("analyze this", &json!({"type": "object"}));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "analyze this");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_null_schema_is_omitted() {
        let request = provider().build_request("p", &Value::Null);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_first_text_concatenates_parts() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]}}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        }))
        .unwrap();
        assert_eq!(body.first_text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_first_text_missing() {
        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(blocked.first_text(), None);

        let no_parts: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}))
                .unwrap();
        assert_eq!(no_parts.first_text(), None);
    }
}
