//! Probe command handler.
//!
//! Runs the built-in sample questions and prints each answer with its stage.

use clap::Args;
use concierge_core::{config::AppConfig, AppError, AppResult};
use concierge_knowledge::refusals::NOT_READY_MESSAGE;
use concierge_knowledge::samples::{category_names, ProbeCategory};
use concierge_knowledge::{probe_category, Concierge, PROBE_CATEGORIES};

/// Run the built-in sample questions
#[derive(Args, Debug)]
pub struct ProbeCommand {
    /// Only run one category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl ProbeCommand {
    /// Execute the probe command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing probe command");

        let categories: Vec<&ProbeCategory> = match self.category {
            Some(ref name) => {
                let category = probe_category(name).ok_or_else(|| {
                    AppError::Config(format!(
                        "Unknown probe category: {}. Available: {}",
                        name,
                        category_names().collect::<Vec<_>>().join(", ")
                    ))
                })?;
                vec![category]
            }
            None => PROBE_CATEGORIES.iter().collect(),
        };

        let concierge = Concierge::start(config).await;
        let Some(router) = concierge.router() else {
            println!("{}", NOT_READY_MESSAGE);
            return Ok(());
        };

        for category in categories {
            println!("== {} ==", category.name);
            for question in category.questions {
                let resolution = router.resolve(question).await;
                println!("Q: {}", question);
                println!("A [{}]: {}", resolution.stage, resolution.answer);
            }
            println!();
        }

        Ok(())
    }
}
