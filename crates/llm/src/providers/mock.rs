//! Mock LLM provider returning scripted completions.

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use concierge_core::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Fail(String),
}

/// Mock provider for offline runs and testing.
///
/// Every request receives the same scripted outcome. The client records how
/// often it was called and the last prompt it saw, so callers can assert
/// whether generation was reached at all.
#[derive(Debug)]
pub struct MockClient {
    script: Script,
    echo_prompt: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockClient {
    /// Mock that completes every prompt with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(reply.into()))
    }

    /// Mock whose every completion fails with an LLM error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(message.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            echo_prompt: false,
            delay: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Return the prompt followed by the reply, like a raw causal LM decode.
    pub fn echoing_prompt(mut self) -> Self {
        self.echo_prompt = true;
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of completion calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt of the most recent completion call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(request.prompt.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.script {
            Script::Fail(ref message) => Err(AppError::Llm(message.clone())),
            Script::Reply(ref reply) => {
                let content = if self.echo_prompt {
                    format!("{}{}", request.prompt, reply)
                } else {
                    reply.clone()
                };

                let prompt_tokens = request.prompt.split_whitespace().count() as u32;
                let completion_tokens = reply.split_whitespace().count() as u32;

                Ok(LlmResponse {
                    content,
                    model: request.model.clone(),
                    usage: LlmUsage::new(prompt_tokens, completion_tokens),
                    done: true,
                })
            }
        }
    }
}
