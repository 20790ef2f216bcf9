//! Generate command - look up or generate Q&A content

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::{HistoryEntry, PartitionKey};
use crate::infrastructure::logging::{self, LoggingConfig};

#[derive(Args)]
pub struct GenerateArgs {
    /// Job role or description to prepare for
    pub role: String,

    /// Interview level (partition): entry, mid, senior, or a custom key
    #[arg(short, long, default_value = "entry")]
    pub level: String,

    /// Write the content to a file as well as stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip recording this run in the history log
    #[arg(long)]
    pub no_history: bool,
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let service = crate::create_qa_service(&config)?;
    let partition = PartitionKey::new(&args.level);

    let outcome = service.generate_or_retrieve(&args.role, &partition).await?;

    if outcome.from_cache {
        eprintln!("Retrieved from cache.");
    } else {
        eprintln!("Generated fresh content and cached it.");
    }

    println!("{}", outcome.payload);

    if let Some(path) = &args.output {
        fs::write(path, &outcome.payload)?;
        eprintln!("Saved to {}", path.display());
    }

    if !args.no_history {
        let history = crate::create_history_log(&config);
        let entry = HistoryEntry::new(&args.role, partition, &outcome.payload);

        // History is display-only bookkeeping; a write failure must not
        // fail the command.
        if let Err(e) = history.append(entry).await {
            warn!("Failed to record history entry: {}", e);
        }
    }

    Ok(())
}
