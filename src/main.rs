use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coursetab::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coursetab=info")),
        )
        .init();

    let cli = Cli::parse();
    coursetab::run(cli).await.context("scrape failed")?;

    Ok(())
}
