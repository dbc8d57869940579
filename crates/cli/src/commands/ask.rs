//! Ask command handler.
//!
//! Routes a single question through the cascade.

use clap::Args;
use concierge_core::{config::AppConfig, AppError, AppResult};
use concierge_knowledge::refusals::NOT_READY_MESSAGE;
use concierge_knowledge::Concierge;

/// Answer a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Output as JSON ({"answer", "stage"})
    #[arg(long)]
    pub json: bool,

    /// Report which stage produced the answer on stderr
    #[arg(long)]
    pub trace: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Question: {}", self.question);

        let concierge = Concierge::start(config).await;

        let resolution = match concierge.respond(&self.question).await {
            Ok(resolution) => resolution,
            Err(AppError::NotReady(reason)) => {
                tracing::warn!("Service unavailable: {}", reason);
                println!("{}", NOT_READY_MESSAGE);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if self.trace {
            eprintln!("[{}]", resolution.stage);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        } else {
            println!("{}", resolution.answer);
        }

        Ok(())
    }
}
