//! LLM configuration types.
//!
//! `GenerationConfig` holds the sampling knobs applied to every completion
//! request. They keep a small model on-topic and are fixed per deployment,
//! never per request.

use crate::client::LlmRequest;
use serde::{Deserialize, Serialize};

/// Sampling configuration for grounded completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum new tokens per completion
    #[serde(rename = "maxNewTokens")]
    pub max_new_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Top-k sampling bound
    #[serde(rename = "topK")]
    pub top_k: u32,

    /// Top-p nucleus bound
    #[serde(rename = "topP")]
    pub top_p: f32,

    /// N-gram repeat suppression window
    #[serde(rename = "noRepeatNgram")]
    pub no_repeat_ngram: u32,

    /// End-of-sequence marker passed as a stop sequence
    #[serde(rename = "eosMarker", skip_serializing_if = "Option::is_none")]
    pub eos_marker: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 100,
            temperature: 0.3,
            top_k: 30,
            top_p: 0.9,
            no_repeat_ngram: 2,
            eos_marker: Some("<|endoftext|>".to_string()),
        }
    }
}

impl GenerationConfig {
    /// Apply these settings to a request.
    pub fn apply(&self, request: LlmRequest) -> LlmRequest {
        let request = request
            .with_max_tokens(self.max_new_tokens)
            .with_temperature(self.temperature)
            .with_sampling(self.top_k, self.top_p)
            .with_repeat_window(self.no_repeat_ngram);

        match self.eos_marker {
            Some(ref eos) => request.with_stop(eos.clone()),
            None => request,
        }
    }
}

/// Provider type enum for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    Ollama,
    Mock,
}

impl ProviderType {
    /// Parse provider type from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Some(Self::Ollama),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }

    /// Get the canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::Mock => "mock",
        }
    }
}
