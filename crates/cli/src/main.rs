//! To-hit calculator entry point.
mod config;
mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, CliConfig};
use report::Evaluation;
use tohit_content::{Scenario, ScenarioLoader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env().merge_cli(&cli);

    setup_logging(config.verbose);

    let scenarios = load_scenarios(&cli.path)?;
    if scenarios.is_empty() {
        anyhow::bail!("No scenario files found in {}", cli.path.display());
    }

    let evaluations: Vec<_> = scenarios
        .iter()
        .map(|(path, scenario)| Evaluation::new(path, scenario))
        .collect();

    for evaluation in &evaluations {
        tracing::info!(
            path = %evaluation.path.display(),
            chance = evaluation.breakdown.chance,
            ranged = evaluation.breakdown.is_ranged(),
            "Evaluated scenario"
        );
    }

    let output = report::render(&evaluations, config.format)?;
    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write results")?;

    Ok(())
}

fn load_scenarios(path: &Path) -> Result<Vec<(PathBuf, Scenario)>> {
    if path.is_dir() {
        ScenarioLoader::load_dir(path)
    } else {
        let scenario = ScenarioLoader::load(path)?;
        Ok(vec![(path.to_path_buf(), scenario)])
    }
}

/// Setup logging to stderr so stdout carries only results
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let env_filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    tracing::debug!("Logging initialized: level={}", level);
}
