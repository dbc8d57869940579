//! Ollama LLM provider implementation.
//!
//! This module provides integration with Ollama, a local LLM runtime.
//! Ollama API: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use concierge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tokens of history the repeat penalty looks back over.
const REPEAT_LOOKBACK: u32 = 64;

/// Penalty applied to tokens already seen in the lookback window.
const REPEAT_PENALTY: f32 = 1.3;

/// Ollama `/api/generate` request format.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    /// Raw mode skips the model's chat template; the prompt is already a scaffold.
    raw: bool,
    options: OllamaOptions,
}

/// Sampling options nested under `options`.
#[derive(Debug, Default, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_last_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
}

/// Ollama API response format.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: String,
    response: String,
    done: bool,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Ollama `/api/tags` response format.
#[derive(Debug, Deserialize)]
struct OllamaTags {
    #[serde(default)]
    models: Vec<OllamaModel>,
}

#[derive(Debug, Deserialize)]
struct OllamaModel {
    name: String,
}

/// Ollama LLM client.
pub struct OllamaClient {
    /// Base URL for Ollama API
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new Ollama client with default settings.
    ///
    /// Default URL: http://localhost:11434
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:11434")
    }

    /// Create a new Ollama client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose HTTP requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Llm(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Convert LlmRequest to Ollama format.
    fn to_ollama_request(&self, request: &LlmRequest) -> OllamaRequest {
        OllamaRequest {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            stream: false,
            raw: true,
            options: OllamaOptions {
                num_predict: request.max_tokens,
                temperature: request.temperature,
                top_k: request.top_k,
                top_p: request.top_p,
                // Ollama has no n-gram ban. A repeat window is approximated by
                // penalising every token seen in a wider lookback.
                repeat_last_n: request.repeat_window.map(|w| w.max(REPEAT_LOOKBACK)),
                repeat_penalty: request.repeat_window.map(|_| REPEAT_PENALTY),
                stop: request.stop.clone(),
            },
        }
    }

    /// Convert Ollama response to LlmResponse.
    fn convert_response(&self, response: OllamaResponse) -> LlmResponse {
        let usage = LlmUsage::new(
            response.prompt_eval_count.unwrap_or(0),
            response.eval_count.unwrap_or(0),
        );

        LlmResponse {
            content: response.response,
            model: response.model,
            usage,
            done: response.done,
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an Ollama model listing satisfies `wanted` ("llama3.2" matches "llama3.2:latest").
fn model_available(models: &[OllamaModel], wanted: &str) -> bool {
    models.iter().any(|m| {
        m.name == wanted
            || m.name
                .split_once(':')
                .map(|(base, _)| base == wanted)
                .unwrap_or(false)
    })
}

#[async_trait::async_trait]
impl LlmClient for OllamaClient {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::debug!("Sending completion request to Ollama");
        tracing::trace!("Request: {:?}", request);

        let ollama_request = self.to_ollama_request(request);
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Ollama response: {}", e)))?;

        tracing::debug!(
            "Received completion from Ollama ({} tokens)",
            ollama_response.eval_count.unwrap_or(0)
        );

        Ok(self.convert_response(ollama_response))
    }

    async fn health_check(&self, model: &str) -> AppResult<()> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Ollama is unreachable at {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Llm(format!(
                "Ollama health check failed ({})",
                response.status()
            )));
        }

        let tags: OllamaTags = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Ollama model list: {}", e)))?;

        if !model_available(&tags.models, model) {
            return Err(AppError::Llm(format!(
                "Model '{}' is not available in Ollama; run `ollama pull {}`",
                model, model
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_client_creation() {
        let client = OllamaClient::new();
        assert_eq!(client.provider_name(), "ollama");
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = OllamaClient::with_base_url("http://gpu-box:11434/");
        assert_eq!(client.base_url, "http://gpu-box:11434");
    }

    #[test]
    fn test_ollama_request_conversion() {
        let client = OllamaClient::new();
        let request = LlmRequest::new("Hello", "llama3.2")
            .with_temperature(0.3)
            .with_max_tokens(100)
            .with_sampling(30, 0.9)
            .with_repeat_window(2);

        let ollama_req = client.to_ollama_request(&request);
        assert_eq!(ollama_req.model, "llama3.2");
        assert_eq!(ollama_req.prompt, "Hello");
        assert!(!ollama_req.stream);
        assert_eq!(ollama_req.options.temperature, Some(0.3));
        assert_eq!(ollama_req.options.num_predict, Some(100));
        assert_eq!(ollama_req.options.top_k, Some(30));
        assert_eq!(ollama_req.options.repeat_last_n, Some(REPEAT_LOOKBACK));
        assert_eq!(ollama_req.options.repeat_penalty, Some(REPEAT_PENALTY));
    }

    #[test]
    fn test_repeat_penalty_only_with_window() {
        let client = OllamaClient::new();
        let request = LlmRequest::new("Hello", "llama3.2");
        let json = serde_json::to_value(client.to_ollama_request(&request)).unwrap();

        assert!(json["options"].get("repeat_last_n").is_none());
        assert!(json["options"].get("repeat_penalty").is_none());
    }

    #[test]
    fn test_options_serialize_nested() {
        let client = OllamaClient::new();
        let request = LlmRequest::new("Hello", "llama3.2").with_max_tokens(10);
        let json = serde_json::to_value(client.to_ollama_request(&request)).unwrap();

        assert_eq!(json["options"]["num_predict"], 10);
        assert!(json["options"].get("temperature").is_none());
        assert!(json["options"].get("stop").is_none());
    }

    #[test]
    fn test_model_available() {
        let models = vec![
            OllamaModel {
                name: "llama3.2:latest".to_string(),
            },
            OllamaModel {
                name: "qwen2.5:7b".to_string(),
            },
        ];

        assert!(model_available(&models, "llama3.2"));
        assert!(model_available(&models, "qwen2.5:7b"));
        assert!(!model_available(&models, "mistral"));
    }
}
