//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{CliError, CliResult};

/// busydates - Publish the busy days of a calendar feed as JSON
#[derive(Debug, Parser)]
#[command(name = "busydates")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// iCalendar feed URL (deployments set the environment variable
    /// instead of passing it on the command line)
    #[arg(long, env = "ICAL_SECRET_URL", hide_env_values = true)]
    pub url: Option<String>,

    /// Path of the JSON file to write
    #[arg(long, short, default_value = "data.json")]
    pub output: PathBuf,

    /// Fetch timeout in seconds
    #[arg(long, default_value = "15")]
    pub timeout: u64,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

impl Cli {
    /// Resolves the feed URL, failing with a configuration error when
    /// neither the flag nor the environment variable is set.
    pub fn feed_url(&self) -> CliResult<String> {
        self.url.clone().ok_or_else(|| {
            CliError::Config("feed URL is not set (pass --url or set ICAL_SECRET_URL)".to_string())
        })
    }
}
