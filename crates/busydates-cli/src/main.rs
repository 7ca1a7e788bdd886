//! busydates CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use busydates_cli::cli::Cli;
use busydates_cli::error::CliResult;
use busydates_cli::persist;
use busydates_core::extract_busy_dates;
use busydates_feed::{parse_feed, FeedFetcher, FetchConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Missing configuration is fatal before any fetch is attempted.
    let url = cli.feed_url()?;

    let fetcher = FeedFetcher::new(FetchConfig {
        timeout: Duration::from_secs(cli.timeout),
        ..FetchConfig::default()
    })?;

    let body = fetcher.fetch(&url).await?;
    let events = parse_feed(&body)?;
    let extraction = extract_busy_dates(&events);

    persist::write_busy_dates(&cli.output, &extraction.dates)?;

    println!(
        "Processed {} events, wrote {} busy dates to {}",
        extraction.processed,
        extraction.dates.len(),
        cli.output.display()
    );
    if extraction.skipped > 0 {
        println!(
            "Skipped {} events with missing or unusable dates",
            extraction.skipped
        );
    }

    Ok(())
}
