//! Command handlers for the Concierge CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod chat;
pub mod check;
pub mod faq;
pub mod probe;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use check::CheckCommand;
pub use faq::FaqCommand;
pub use probe::ProbeCommand;
