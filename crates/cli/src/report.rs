//! Rendering of evaluated scenarios.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use tohit_content::Scenario;
use tohit_core::ToHitBreakdown;

use crate::config::OutputFormat;

/// One evaluated scenario.
#[derive(Debug, Serialize)]
pub struct Evaluation<'a> {
    pub path: &'a Path,
    pub scenario: &'a Scenario,
    pub breakdown: ToHitBreakdown,
}

impl<'a> Evaluation<'a> {
    pub fn new(path: &'a Path, scenario: &'a Scenario) -> Self {
        Self {
            path,
            scenario,
            breakdown: scenario.evaluate(),
        }
    }

    fn title(&self) -> String {
        let fallback = self
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("scenario");
        self.scenario.display_name(fallback).to_string()
    }
}

pub fn render(evaluations: &[Evaluation<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(render_summary(evaluations)),
        OutputFormat::Json => render_json(evaluations),
        OutputFormat::Debug => Ok(format!("{:#?}\n", evaluations)),
    }
}

fn render_summary(evaluations: &[Evaluation<'_>]) -> String {
    let mut out = String::new();

    for (index, evaluation) in evaluations.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let breakdown = &evaluation.breakdown;

        let _ = writeln!(
            out,
            "{} {}",
            style(evaluation.title()).bold().cyan(),
            style(format!("({})", evaluation.path.display())).dim()
        );
        let _ = writeln!(
            out,
            "  {} {}%",
            style("Chance:").bold().yellow(),
            breakdown.chance
        );
        let _ = writeln!(out, "  base: {}", breakdown.base);
        if let Some(range) = breakdown.range {
            let _ = writeln!(out, "  range distance: {}", range.distance);
        }
        for (label, value) in breakdown.contributions() {
            if value != 0 {
                let _ = writeln!(out, "  {}: {:+}", label, value);
            }
        }
        if breakdown.is_clamped() {
            let _ = writeln!(out, "  clamped from {}", breakdown.total);
        }
    }

    out
}

fn render_json(evaluations: &[Evaluation<'_>]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(evaluations).context("Failed to serialize results to JSON")?;
    json.push('\n');
    Ok(json)
}
