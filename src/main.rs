use clap::Parser;
use prepforge::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => cli::generate::run(args).await,
        Command::History(args) => cli::history::run(args).await,
        Command::Forget(args) => cli::forget::run(args).await,
    }
}
