//! FAQ command handler.

use clap::Args;
use concierge_core::{config::AppConfig, AppResult};
use concierge_knowledge::load_knowledge_base;

/// List the knowledge base FAQ
#[derive(Args, Debug)]
pub struct FaqCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl FaqCommand {
    /// Execute the faq command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing faq command");

        let kb = load_knowledge_base(&config.knowledge_file())?;

        if self.json {
            let payload = serde_json::json!({ "faq": kb.faq });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        for (i, entry) in kb.faq.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("Q: {}", entry.question);
            println!("A: {}", entry.answer);
        }

        Ok(())
    }
}
