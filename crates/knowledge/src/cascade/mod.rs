//! Response cascade: deterministic rules first, guarded generation last.

pub mod entity;
pub mod faq;
pub mod generative;
pub mod keyword;
pub mod relevance;
pub mod router;

pub use entity::{AliasTable, EntityResolver};
pub use faq::FaqMatcher;
pub use generative::{validate_completion, Generation, GenerativeFallback, RefusalReason};
pub use keyword::{KeywordResolver, KeywordTable};
pub use relevance::RelevanceGuard;
pub use router::{Resolution, ResponseRouter, Stage};
