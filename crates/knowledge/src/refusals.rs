//! Fixed user-facing messages.

/// Off-domain questions and rejected generations.
pub const DOMAIN_REFUSAL: &str = "I'm sorry, I can only answer questions about SM Technology, its services, management team, and company structure.";

/// The generative stage broke (model error, timeout, prompt failure).
pub const GENERATION_FAILURE_REFUSAL: &str = "I'm sorry, but I can only answer questions about SM Technology's services, management team, and company structure.";

/// Questions addressed to the assistant itself.
pub const PERSONA_MESSAGE: &str = "I'm an AI chatbot designed to provide information about SM Technology, its services, and management team.";

/// A person/entity question whose name could not be extracted.
pub const MISSING_NAME: &str = "I'm not sure who you're asking about. Please provide a name.";

/// Shown instead of an answer while the service failed to start.
pub const NOT_READY_MESSAGE: &str =
    "Chatbot service is not available at the moment. Please try again later.";

/// Refusal for a person or company that is not in the alias table.
pub fn unknown_entity(name: &str) -> String {
    format!(
        "I don't have any information about {}. I can only provide information about the management team of SM Technology and bdCalling IT.",
        name
    )
}
