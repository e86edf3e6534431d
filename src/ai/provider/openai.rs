//! OpenAI-Compatible Provider
//!
//! Chat Completions API with a strict `json_schema` response format.
//! Works against any endpoint speaking the same protocol via `api_base`.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

use super::{
    LlmProvider, LlmResponse, ProviderConfig, ResponseMetadata, ResponseTiming, TokenUsage,
    prompt_utils,
};
use crate::constants::provider as defaults;
use crate::types::{Result, TransportCategory, TransportError};

const SCHEMA_NAME: &str = "analysis_result";

/// OpenAI Chat Completions provider
pub struct OpenAiProvider {
    api_base: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl OpenAiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_base = config.resolve_api_base(defaults::OPENAI_API_BASE)?;
        let client = config.http_client()?;
        let model = config
            .model
            .unwrap_or_else(|| defaults::OPENAI_DEFAULT_MODEL.to_string());

        Ok(Self {
            api_base,
            model,
            temperature: config.temperature,
            client,
        })
    }

    fn build_request(&self, prompt: &str, schema: &Value) -> ChatCompletionRequest {
        let response_format = if schema.is_null() {
            ResponseFormat::JsonObject
        } else {
            ResponseFormat::JsonSchema {
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME.to_string(),
                    strict: true,
                    schema: schema.clone(),
                },
            }
        };

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt_utils::build_system_prompt(schema),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            response_format,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn submit(
        &self,
        prompt: &str,
        schema: &Value,
        credential: &SecretString,
    ) -> std::result::Result<LlmResponse, TransportError> {
        info!(
            "Generating with OpenAI (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let start_time = Instant::now();
        let request = self.build_request(prompt, schema);
        let url = format!("{}/chat/completions", self.api_base);

        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose_secret())
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

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            TransportError::new(
                TransportCategory::Protocol,
                format!("Failed to decode OpenAI response: {}", e),
                self.name(),
            )
        })?;

        let usage = body
            .usage
            .as_ref()
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);

        Ok(LlmResponse {
            text,
            usage,
            timing: ResponseTiming::from_duration(elapsed),
            metadata: ResponseMetadata {
                model: self.model.clone(),
                provider: self.name().to_string(),
            },
        })
    }

    fn name(&self) -> &str {
        defaults::OPENAI
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseFormat {
    JsonObject,
    JsonSchema { json_schema: JsonSchemaFormat },
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> OpenAiProvider {
        OpenAiProvider::new(ProviderConfig {
            provider: "openai".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_request_uses_strict_json_schema() {
        let schema = json!({"type": "object", "properties": {}});
        let value = serde_json::to_value(provider().build_request("hi", &schema)).unwrap();

        assert_eq!(value["model"], defaults::OPENAI_DEFAULT_MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(value["response_format"]["json_schema"]["strict"], true);
        assert_eq!(value["response_format"]["json_schema"]["schema"], schema);
    }

    #[test]
    fn test_request_without_schema() {
        let value = serde_json::to_value(provider().build_request("hi", &Value::Null)).unwrap();
        assert_eq!(value["response_format"], json!({"type": "json_object"}));
    }

    #[test]
    fn test_response_without_content() {
        let body: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(body.choices[0].message.content.is_none());
    }
}
