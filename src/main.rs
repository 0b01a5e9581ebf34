use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coffeescraper::{config, pipeline, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Export the coffee production table from Wikipedia as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Page holding the production wikitable
    #[arg(long, default_value = config::DEFAULT_SOURCE_URL)]
    url: String,

    /// Output JSON file (overwritten)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// User-Agent header sent with the request
    #[arg(long, default_value = config::DEFAULT_USER_AGENT)]
    user_agent: String,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configure ────────────────────────────────────────────────
    let cli = Cli::parse();
    let cfg = Config::new(&cli.url, cli.output)
        .with_context(|| format!("parsing --url {}", cli.url))?
        .with_user_agent(cli.user_agent);
    info!(url = %cfg.source_url, out = %cfg.output_path.display(), "startup");

    // ─── 3) fetch → extract → write ──────────────────────────────────
    let records = pipeline::run(&cfg)
        .with_context(|| format!("exporting {} to {}", cfg.source_url, cfg.output_path.display()))?;

    info!(records = records.len(), "all done");
    Ok(())
}
