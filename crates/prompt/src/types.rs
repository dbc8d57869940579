//! Prompt types for Concierge.
//!
//! This module defines the domain entities for the prompt system.

use serde::{Deserialize, Serialize};

/// Identifier of the built-in grounded prompt.
pub const GROUNDED_PROMPT_ID: &str = "concierge.grounded";

const GROUNDED_TEMPLATE: &str =
    "Information about {{companyName}}:\n{{context}}\n\nQuestion: {{question}}\nAnswer:";

/// A prompt definition, built in or loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDefinition {
    /// Unique prompt identifier
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// API version for schema evolution
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Creator identifier
    #[serde(rename = "createdBy", default)]
    pub created_by: String,

    /// Template string with Handlebars syntax
    pub template: String,

    /// Marker after which the model's answer starts
    #[serde(rename = "answerMarker", default = "default_answer_marker")]
    pub answer_marker: String,
}

fn default_answer_marker() -> String {
    "Answer:".to_string()
}

impl PromptDefinition {
    /// The built-in grounded question/answer prompt.
    ///
    /// Variables: `companyName`, `context`, `question`.
    pub fn grounded() -> Self {
        Self {
            id: GROUNDED_PROMPT_ID.to_string(),
            title: "Grounded company question".to_string(),
            api_version: "1.0".to_string(),
            created_by: "builtin".to_string(),
            template: GROUNDED_TEMPLATE.to_string(),
            answer_marker: default_answer_marker(),
        }
    }
}

/// A fully rendered prompt ready for completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// Rendered prompt text
    pub text: String,

    /// Metadata about the built prompt
    pub metadata: BuiltPromptMetadata,
}

/// Metadata about a built prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPromptMetadata {
    /// Source prompt ID
    #[serde(rename = "sourcePromptId")]
    pub source_prompt_id: String,

    /// Marker that precedes the answer in the completed text
    #[serde(rename = "answerMarker")]
    pub answer_marker: String,
}
