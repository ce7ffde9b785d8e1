//! CLI configuration: command line arguments with environment fallbacks.
use std::env;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Evaluate to-hit chances for attack scenario files
#[derive(Parser, Debug)]
#[command(name = "tohit-cli")]
#[command(about = "Combat to-hit calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scenario file (.ron or .toml) or a directory of scenario files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format (defaults to $TOHIT_FORMAT, then summary)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chance plus every non-zero contribution
    #[default]
    Summary,
    /// Full JSON breakdown
    Json,
    /// Pretty-printed debug format
    Debug,
}

/// Resolved settings for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub verbose: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TOHIT_FORMAT` - Output format: summary, json or debug (default: summary)
    /// - `TOHIT_VERBOSE` - Enable debug logging (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(format) = env::var("TOHIT_FORMAT")
            .ok()
            .and_then(|value| OutputFormat::from_str(&value, true).ok())
        {
            config.format = format;
        }

        if let Some(verbose) = read_env::<bool>("TOHIT_VERBOSE") {
            config.verbose = verbose;
        }

        config
    }

    /// Command line flags take precedence over the environment.
    #[must_use]
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.format {
            self.format = format;
        }
        self.verbose |= cli.verbose;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
