//! Company knowledge base and the response cascade built on it.
//!
//! A question flows through fixed rules first (FAQ, keywords, named
//! entities, relevance guard) and reaches the language model only when none
//! of them answers. Model output is validated before it is shown.

pub mod cascade;
pub mod context;
pub mod loader;
pub mod refusals;
pub mod samples;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use cascade::{Generation, GenerativeFallback, RefusalReason, Resolution, ResponseRouter, Stage};
pub use context::build_context;
pub use loader::{load_knowledge_base, parse_knowledge_base};
pub use samples::{probe_category, ProbeCategory, PROBE_CATEGORIES};
pub use service::{build_router, router_with_client, Concierge};
pub use types::{FaqEntry, KnowledgeBase};
