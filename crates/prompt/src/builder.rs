//! Prompt builder for rendering templates.

use crate::types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
use concierge_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

const TEMPLATE_NAME: &str = "prompt";

/// A compiled prompt template.
///
/// The template is registered once at construction; rendering is then a
/// read-only operation that can run from many tasks at once.
pub struct PromptRenderer {
    definition: PromptDefinition,
    registry: Handlebars<'static>,
}

impl PromptRenderer {
    /// Compile a prompt definition.
    ///
    /// # Example
    /// ```
    /// use concierge_prompt::{PromptDefinition, PromptRenderer};
    /// use std::collections::HashMap;
    ///
    /// let renderer = PromptRenderer::new(PromptDefinition::grounded()).unwrap();
    /// let mut vars = HashMap::new();
    /// vars.insert("companyName".to_string(), "SM Technology".to_string());
    /// vars.insert("context".to_string(), "SM Technology builds apps.".to_string());
    /// vars.insert("question".to_string(), "What do you build?".to_string());
    ///
    /// let built = renderer.render(vars).unwrap();
    /// assert!(built.text.ends_with("Answer:"));
    /// ```
    pub fn new(definition: PromptDefinition) -> AppResult<Self> {
        let mut registry = Handlebars::new();

        // Plain text output
        registry.register_escape_fn(handlebars::no_escape);

        registry
            .register_template_string(TEMPLATE_NAME, &definition.template)
            .map_err(|e| {
                AppError::Prompt(format!(
                    "Failed to register template '{}': {}",
                    definition.id, e
                ))
            })?;

        tracing::debug!("Compiled prompt template: {}", definition.id);

        Ok(Self {
            definition,
            registry,
        })
    }

    /// The definition this renderer was built from.
    pub fn definition(&self) -> &PromptDefinition {
        &self.definition
    }

    /// Render the template with the given variables.
    pub fn render(&self, variables: HashMap<String, String>) -> AppResult<BuiltPrompt> {
        let text = self
            .registry
            .render(TEMPLATE_NAME, &variables)
            .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

        Ok(BuiltPrompt {
            text,
            metadata: BuiltPromptMetadata {
                source_prompt_id: self.definition.id.clone(),
                answer_marker: self.definition.answer_marker.clone(),
            },
        })
    }
}
