//! Service startup and readiness.
//!
//! Startup loads the knowledge base, builds the model client and checks the
//! model is reachable. Any failure leaves the service `Unavailable`; it never
//! retries on its own.

use crate::cascade::{GenerativeFallback, Resolution, ResponseRouter};
use crate::loader::load_knowledge_base;
use crate::types::KnowledgeBase;
use concierge_core::{AppConfig, AppError, AppResult};
use concierge_llm::{create_client, LlmClient};
use concierge_prompt::{load_prompt_or_default, PromptRenderer, GROUNDED_PROMPT_ID};
use std::sync::Arc;
use std::time::Duration;

/// A started service: either answering or explaining why it cannot.
#[derive(Clone)]
pub enum Concierge {
    Ready(Arc<ResponseRouter>),
    Unavailable { reason: String },
}

impl Concierge {
    /// Start the service from configuration.
    pub async fn start(config: &AppConfig) -> Self {
        match build_router(config).await {
            Ok(router) => {
                tracing::info!("Concierge ready (provider: {})", config.provider);
                Self::Ready(Arc::new(router))
            }
            Err(e) => {
                tracing::error!("Concierge failed to start: {}", e);
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn router(&self) -> Option<&ResponseRouter> {
        match self {
            Self::Ready(router) => Some(router),
            Self::Unavailable { .. } => None,
        }
    }

    /// Answer `input`, or `NotReady` while unavailable.
    pub async fn respond(&self, input: &str) -> AppResult<Resolution> {
        match self {
            Self::Ready(router) => Ok(router.resolve(input).await),
            Self::Unavailable { reason } => Err(AppError::NotReady(reason.clone())),
        }
    }
}

/// Load the knowledge base, connect the model and assemble the cascade.
pub async fn build_router(config: &AppConfig) -> AppResult<ResponseRouter> {
    config.validate()?;

    let kb = load_knowledge_base(&config.knowledge_file())?;

    let timeout = config.provider_timeout().map(Duration::from_secs);
    let mock_reply = config.mock_reply();
    let client = create_client(
        &config.provider,
        config.endpoint.as_deref(),
        timeout,
        mock_reply.as_deref(),
    )
    .map_err(AppError::Llm)?;

    client.health_check(&config.model).await?;

    router_with_client(config, &kb, client)
}

/// Assemble the cascade around an existing client.
pub fn router_with_client(
    config: &AppConfig,
    kb: &KnowledgeBase,
    client: Arc<dyn LlmClient>,
) -> AppResult<ResponseRouter> {
    let definition = load_prompt_or_default(&config.workspace, GROUNDED_PROMPT_ID)?;
    let renderer = PromptRenderer::new(definition)?;

    let mut generative = GenerativeFallback::new(client, &config.model, &kb.company.name, renderer)
        .with_max_concurrent(config.generation.max_concurrent);

    if config.generation.timeout_secs > 0 {
        generative = generative.with_timeout(Duration::from_secs(config.generation.timeout_secs));
    }

    Ok(ResponseRouter::from_knowledge(kb, generative))
}
