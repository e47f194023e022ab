mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use vitae_core::SearchConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SearchConfig::from_env()?;

    // Initialize tracing; stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, kind, limit } => {
            commands::search::run(&cli.data, config, &query, kind, limit).await
        }
        Commands::Suggest { prefix } => commands::suggest::run(&cli.data, config, &prefix).await,
        Commands::Tokens => commands::tokens::run(&cli.data),
        Commands::Stats => commands::stats::run(&cli.data, config).await,
        Commands::Version => commands::version::run(),
    }
}
