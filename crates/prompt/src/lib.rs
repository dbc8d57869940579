//! Prompt system for Concierge.
//!
//! This crate provides grounded prompt management with:
//! - A built-in grounded question/answer prompt
//! - YAML-based prompt overrides per workspace
//! - Handlebars template rendering

pub mod builder;
pub mod loader;
pub mod types;

// Re-export main types
pub use builder::PromptRenderer;
pub use loader::{list_prompts, load_prompt, load_prompt_or_default};
pub use types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition, GROUNDED_PROMPT_ID};
