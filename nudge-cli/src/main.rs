//! Nudge CLI - remind Slack about pull requests that still need review
//!
//! One invocation is one run: fetch open pull requests, pick the ones still
//! waiting on reviewers, post one batched reminder. Meant to be driven by an
//! external scheduler such as cron.

mod run;

use clap::Parser;
use nudge_core::{Config, Secrets};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Remind Slack about pull requests that still need review
#[derive(Parser, Debug)]
#[command(name = "nudge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Slack channel to post the reminder to
    #[arg(short, long)]
    channel: Option<String>,

    /// Bitbucket repository to scan
    #[arg(short, long)]
    repo: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Build configuration once; everything downstream borrows it
    let config = Config::load_with_overrides(cli.channel, cli.repo)?;

    // Missing credentials are fatal before any network call
    let credentials = Secrets::load()?.credentials()?;

    if cli.verbose {
        tracing::info!(
            channel = %config.reminder.channel,
            repo = %config.reminder.repo,
            stale_after = ?config.reminder.stale_after,
            ignore_words = ?config.reminder.ignore_words,
            "Configuration loaded"
        );
    }

    run::run(&config, &credentials).await
}
