use anyhow::Context;
use clap::Parser;
use news_digest::runner::{CONFIG_FILE_NAME, NEWS_DIR_NAME};
use news_digest::{DigestConfig, FetchConfig, HttpFeedReader, Runner};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fetch news feeds, keep keyword-relevant entries, and write a dated Markdown digest.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Repository root that holds sources.yml and the news/ directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to <root>/sources.yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory (defaults to <root>/news)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // stdout carries only the output path.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(path) => println!("Wrote: {}", path.display()),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    let config_path = cli.config.unwrap_or_else(|| cli.root.join(CONFIG_FILE_NAME));
    let output_dir = cli.output_dir.unwrap_or_else(|| cli.root.join(NEWS_DIR_NAME));

    let config = DigestConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    info!(
        "Loaded {} topic group(s) from {}",
        config.groups.len(),
        config_path.display()
    );

    let reader = HttpFeedReader::new(FetchConfig::default()).context("building HTTP client")?;
    let runner = Runner::new(config, Arc::new(reader), output_dir);

    let path = runner
        .run()
        .await
        .with_context(|| format!("writing digest into {}", runner.output_dir().display()))?;
    Ok(path)
}
