//! Ordered response cascade.

use super::entity::EntityResolver;
use super::faq::FaqMatcher;
use super::generative::{Generation, GenerativeFallback};
use super::keyword::{KeywordResolver, KeywordTable};
use super::relevance::RelevanceGuard;
use crate::context::build_context;
use crate::types::KnowledgeBase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cascade component that produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Faq,
    Keyword,
    Entity,
    Relevance,
    Generated,
    Refused,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::Keyword => "keyword",
            Self::Entity => "entity",
            Self::Relevance => "relevance",
            Self::Generated => "generated",
            Self::Refused => "refused",
        }
    }

    /// Whether the answer came from fixed rules rather than the model.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Generated | Self::Refused)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An answer and the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub answer: String,
    pub stage: Stage,
}

impl Resolution {
    fn new(answer: impl Into<String>, stage: Stage) -> Self {
        Self {
            answer: answer.into(),
            stage,
        }
    }
}

/// Runs the stages in fixed order; the first answer wins.
pub struct ResponseRouter {
    faq: FaqMatcher,
    keywords: KeywordResolver,
    entities: EntityResolver,
    guard: RelevanceGuard,
    generative: GenerativeFallback,
    context: String,
}

impl ResponseRouter {
    pub fn new(
        faq: FaqMatcher,
        keywords: KeywordResolver,
        entities: EntityResolver,
        guard: RelevanceGuard,
        generative: GenerativeFallback,
        context: String,
    ) -> Self {
        Self {
            faq,
            keywords,
            entities,
            guard,
            generative,
            context,
        }
    }

    /// Build every rule stage from `kb`.
    pub fn from_knowledge(kb: &KnowledgeBase, generative: GenerativeFallback) -> Self {
        Self::new(
            FaqMatcher::new(&kb.faq),
            KeywordResolver::new(KeywordTable::from_knowledge(kb)),
            EntityResolver::default(),
            RelevanceGuard::new(),
            generative,
            build_context(kb),
        )
    }

    pub fn keywords(&self) -> &KeywordResolver {
        &self.keywords
    }

    /// Answer `input`. Never fails and never returns an empty answer.
    pub async fn resolve(&self, input: &str) -> Resolution {
        if let Some(answer) = self.faq.find(input) {
            tracing::debug!("Answered from FAQ");
            return Resolution::new(answer, Stage::Faq);
        }

        if let Some(answer) = self.keywords.find(input) {
            tracing::debug!("Answered from keyword table");
            return Resolution::new(answer, Stage::Keyword);
        }

        if self.entities.is_person_or_entity_query(input) {
            tracing::debug!("Answered from entity table");
            return Resolution::new(self.entities.resolve(input), Stage::Entity);
        }

        if let Some(message) = self.guard.check_irrelevant(input) {
            tracing::info!("Question rejected by relevance guard");
            return Resolution::new(message, Stage::Relevance);
        }

        match self.generative.generate(input, &self.context).await {
            Generation::Answer(answer) => {
                tracing::debug!("Answered by {} model", self.generative.provider_name());
                Resolution::new(answer, Stage::Generated)
            }
            Generation::Refused(reason) => {
                tracing::info!("Generated answer refused: {:?}", reason);
                Resolution::new(Generation::Refused(reason).into_text(), Stage::Refused)
            }
        }
    }

    /// Answer text only.
    pub async fn route(&self, input: &str) -> String {
        self.resolve(input).await.answer
    }
}
