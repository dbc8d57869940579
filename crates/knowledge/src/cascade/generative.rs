//! Guarded generative fallback.
//!
//! The model only ever completes a grounded question/answer scaffold. Its
//! output is accepted through a narrow filter: anything suspicious becomes a
//! refusal, never raw model text.

use crate::refusals::{DOMAIN_REFUSAL, GENERATION_FAILURE_REFUSAL};
use concierge_llm::{GenerationConfig, LlmClient, LlmRequest};
use concierge_prompt::PromptRenderer;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Substrings correlated with fabricated self-reference or invented titles.
pub const RED_FLAGS: &[&str] = &[
    "I am",
    "I have",
    "My name",
    "I'm a",
    "I work",
    "I don't",
    "BDD",
    "blog post",
    "years",
    "fan",
    "The CEO is the CEO",
    "The Chairman is the Chairman",
    "MD.",
    "Mr.",
    "Dr.",
];

/// A red flag contained in one of these names is not a red flag.
pub const KNOWN_NAMES: &[&str] = &[
    "MD. Monir Hossain",
    "MD. Shamim Miah",
    "MD. Jabed",
    "MST. Sabina Akter",
];

pub const MIN_ANSWER_CHARS: usize = 10;
pub const MAX_ANSWER_CHARS: usize = 200;

/// Why a generation was not shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefusalReason {
    /// The prompt could not be rendered
    PromptFailed(String),
    /// The invocation limiter was shut down
    Unavailable,
    /// The model did not answer in time
    Timeout,
    /// The model call failed
    ModelError(String),
    /// The completion has no answer marker
    MissingMarker,
    /// The answer contains a red-flag substring
    RedFlag(&'static str),
    /// Fewer characters than `MIN_ANSWER_CHARS`
    TooShort(usize),
    /// More characters than `MAX_ANSWER_CHARS`
    TooLong(usize),
}

impl RefusalReason {
    /// Whether the model itself failed, as opposed to producing a rejected answer.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::PromptFailed(_) | Self::Unavailable | Self::Timeout | Self::ModelError(_)
        )
    }
}

/// Outcome of the generative stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Answer(String),
    Refused(RefusalReason),
}

impl Generation {
    /// User-facing text. Every refusal maps to a fixed string.
    pub fn into_text(self) -> String {
        match self {
            Self::Answer(text) => text,
            Self::Refused(reason) if reason.is_failure() => GENERATION_FAILURE_REFUSAL.to_string(),
            Self::Refused(_) => DOMAIN_REFUSAL.to_string(),
        }
    }
}

/// Cut the answer out of a completed scaffold and validate it.
///
/// `generated` is the prompt followed by the model's continuation. The answer
/// is the text after the first marker (up to any further marker), trimmed
/// and cut at its first newline.
///
/// The first marker may sit inside the question itself; the text after it is
/// then validated like any completion, as the chatbot always did.
pub fn validate_completion(generated: &str, answer_marker: &str) -> Generation {
    let Some(segment) = generated.split(answer_marker).nth(1) else {
        return Generation::Refused(RefusalReason::MissingMarker);
    };

    let mut answer = segment.trim();
    if let Some((first_line, _)) = answer.split_once('\n') {
        answer = first_line;
    }

    if let Some(flag) = RED_FLAGS
        .iter()
        .find(|flag| answer.contains(**flag) && !KNOWN_NAMES.iter().any(|name| name.contains(**flag)))
    {
        return Generation::Refused(RefusalReason::RedFlag(*flag));
    }

    let chars = answer.chars().count();
    if chars > MAX_ANSWER_CHARS {
        return Generation::Refused(RefusalReason::TooLong(chars));
    }
    if chars < MIN_ANSWER_CHARS {
        return Generation::Refused(RefusalReason::TooShort(chars));
    }

    Generation::Answer(answer.to_string())
}

/// Wraps the language model with a grounded prompt and output validation.
pub struct GenerativeFallback {
    client: Arc<dyn LlmClient>,
    model: String,
    company_name: String,
    renderer: PromptRenderer,
    generation: GenerationConfig,
    permits: Arc<Semaphore>,
    timeout: Option<Duration>,
}

impl GenerativeFallback {
    pub fn new(
        client: Arc<dyn LlmClient>,
        model: impl Into<String>,
        company_name: impl Into<String>,
        renderer: PromptRenderer,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            company_name: company_name.into(),
            renderer,
            generation: GenerationConfig::default(),
            permits: Arc::new(Semaphore::new(Semaphore::MAX_PERMITS)),
            timeout: None,
        }
    }

    /// Bound the number of model invocations in flight.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        let permits = max_concurrent.clamp(1, Semaphore::MAX_PERMITS);
        self.permits = Arc::new(Semaphore::new(permits));
        self
    }

    /// Give up on a model invocation after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Complete the grounded scaffold for `input` and validate the answer.
    pub async fn generate(&self, input: &str, context: &str) -> Generation {
        let mut variables = HashMap::new();
        variables.insert("companyName".to_string(), self.company_name.clone());
        variables.insert("context".to_string(), context.to_string());
        variables.insert("question".to_string(), input.to_string());

        let prompt = match self.renderer.render(variables) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!("Prompt rendering failed: {}", e);
                return Generation::Refused(RefusalReason::PromptFailed(e.to_string()));
            }
        };

        let request = self
            .generation
            .apply(LlmRequest::new(prompt.text.clone(), &self.model));

        let _permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(_) => return Generation::Refused(RefusalReason::Unavailable),
        };

        let completion = match self.timeout {
            Some(timeout) => {
                match tokio::time::timeout(timeout, self.client.complete(&request)).await {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::warn!("Generation timed out after {:?}", timeout);
                        return Generation::Refused(RefusalReason::Timeout);
                    }
                }
            }
            None => self.client.complete(&request).await,
        };

        let response = match completion {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                return Generation::Refused(RefusalReason::ModelError(e.to_string()));
            }
        };

        tracing::debug!(
            "Generated {} tokens with {} from prompt '{}'",
            response.usage.completion_tokens,
            response.model,
            prompt.metadata.source_prompt_id
        );

        // Providers that echo the prompt already return the full scaffold.
        let generated = if response.content.starts_with(&prompt.text) {
            response.content
        } else {
            format!("{}{}", prompt.text, response.content)
        };

        validate_completion(&generated, &prompt.metadata.answer_marker)
    }
}
