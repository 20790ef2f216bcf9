//! History command - show previously generated content

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::logging::{self, LoggingConfig};

#[derive(Args)]
pub struct HistoryArgs {
    /// Show at most this many entries, newest last
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print full payloads instead of one-line summaries
    #[arg(long)]
    pub full: bool,
}

pub async fn run(args: HistoryArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let history = crate::create_history_log(&config);
    let mut entries = history.entries().await?;

    if let Some(limit) = args.limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  [{}]  {}",
            entry.created_at().format("%Y-%m-%d %H:%M:%S"),
            entry.partition_key(),
            entry.query_text()
        );

        if args.full {
            println!("{}\n", entry.payload());
        }
    }

    Ok(())
}
