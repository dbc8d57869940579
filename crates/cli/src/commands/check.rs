//! Check command handler.
//!
//! Validates the knowledge base, shows the grounding context and reports
//! whether the model is ready.

use clap::Args;
use concierge_core::{config::AppConfig, AppResult};
use concierge_knowledge::cascade::KeywordTable;
use concierge_knowledge::{build_context, load_knowledge_base, Concierge};
use concierge_prompt::list_prompts;

/// Validate the knowledge base and probe the model
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Skip printing the grounding context
    #[arg(long)]
    pub quiet: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing check command");

        let path = config.knowledge_file();
        let kb = load_knowledge_base(&path)?;

        println!("Knowledge base: {}", path.display());
        println!("  Company:      {}", kb.company.name);
        println!("  Services:     {}", kb.services.len());
        println!("  Prices:       {}", kb.pricing.len());
        println!("  Technologies: {}", kb.tech_stack.len());
        println!("  FAQ entries:  {}", kb.faq.len());
        println!("  Keywords:     {}", KeywordTable::from_knowledge(&kb).len());

        let overrides = list_prompts(&config.workspace)?;
        if !overrides.is_empty() {
            println!("Prompt overrides: {}", overrides.join(", "));
        }

        if !self.quiet {
            println!();
            println!("Context:");
            println!("{}", build_context(&kb));
            println!();
        }

        match Concierge::start(config).await {
            Concierge::Ready(_) => {
                println!("Model: ready ({} / {})", config.provider, config.model);
            }
            Concierge::Unavailable { reason } => {
                println!("Model: unavailable ({})", reason);
            }
        }

        Ok(())
    }
}
