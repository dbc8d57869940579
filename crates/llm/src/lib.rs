//! LLM integration crate for Concierge.
//!
//! This crate provides a provider-agnostic abstraction for text completion.
//! The assistant only ever uses a model as a bounded completer, so the
//! surface is a single non-streaming `complete` call plus a readiness probe.
//!
//! # Providers
//! - **Ollama**: Local LLM runtime (default)
//! - **Mock**: Scripted completions for offline runs and tests
//!
//! # Example
//! ```no_run
//! use concierge_llm::{GenerationConfig, LlmClient, LlmRequest, providers::OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new();
//! let request = GenerationConfig::default().apply(LlmRequest::new("Question: hi\nAnswer:", "llama3.2"));
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{MockClient, OllamaClient};
pub use types::{GenerationConfig, ProviderType};
