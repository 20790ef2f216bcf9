//! Forget command - remove a cached document

use clap::Args;

use crate::config::AppConfig;
use crate::domain::PartitionKey;
use crate::infrastructure::logging::{self, LoggingConfig};

#[derive(Args)]
pub struct ForgetArgs {
    /// Job role or description whose cached content should be removed
    pub role: String,

    /// Interview level (partition) the content was cached under
    #[arg(short, long, default_value = "entry")]
    pub level: String,
}

pub async fn run(args: ForgetArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let service = crate::create_qa_service(&config)?;
    let partition = PartitionKey::new(&args.level);

    if service.forget(&args.role, &partition).await? {
        println!("Removed cached content for '{}' at level '{}'.", args.role, args.level);
    } else {
        println!("Nothing cached for '{}' at level '{}'.", args.role, args.level);
    }

    Ok(())
}
