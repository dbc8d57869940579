//! Chat command handler.
//!
//! Line-oriented session over stdin. Each line is one question.

use clap::Args;
use concierge_core::{config::AppConfig, AppResult};
use concierge_knowledge::refusals::NOT_READY_MESSAGE;
use concierge_knowledge::Concierge;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const EXIT_WORDS: &[&str] = &["exit", "quit"];

/// Interactive question/answer session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Show which stage produced each answer
    #[arg(long)]
    pub trace: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let concierge = Concierge::start(config).await;
        let Some(router) = concierge.router() else {
            println!("{}", NOT_READY_MESSAGE);
            return Ok(());
        };

        println!("Ask me about the company. Type 'exit' to leave.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let input = line.trim();
            if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
                break;
            }

            let resolution = router.resolve(input).await;
            if self.trace {
                println!("[{}] {}", resolution.stage, resolution.answer);
            } else {
                println!("{}", resolution.answer);
            }
        }

        Ok(())
    }
}
