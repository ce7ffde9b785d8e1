//! Attack scenario loader.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Scenario;
use crate::loaders::{LoadResult, read_file};

/// On-disk scenario encodings, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioFormat {
    Ron,
    Toml,
}

impl ScenarioFormat {
    /// Detects the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("ron") {
            Some(Self::Ron)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }

    /// Parses a scenario from text in this format.
    pub fn parse(self, content: &str) -> LoadResult<Scenario> {
        match self {
            Self::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e)),
            Self::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e)),
        }
    }
}

/// Loader for attack scenarios from RON or TOML files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a single scenario file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.toml` file containing a Scenario
    ///
    /// # Returns
    ///
    /// Returns the Scenario, or an error if the file cannot be read, parsed,
    /// or contains values outside the formula's input domain.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let format = ScenarioFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported scenario file {} (expected .ron or .toml)",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let scenario = format
            .parse(&content)
            .with_context(|| format!("Invalid scenario file {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Scenario {} violates input contract", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            ?format,
            name = scenario.name.as_deref().unwrap_or(""),
            "Loaded scenario"
        );

        Ok(scenario)
    }

    /// Load every scenario file in a directory, in file name order.
    ///
    /// Files with other extensions are skipped. Any supported file that
    /// fails to load aborts the whole load.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<(PathBuf, Scenario)>> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if ScenarioFormat::from_path(&path).is_none() {
                tracing::warn!(path = %path.display(), "Skipping non-scenario file");
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        let mut scenarios = Vec::with_capacity(paths.len());
        for path in paths {
            let scenario = Self::load(&path)?;
            scenarios.push((path, scenario));
        }

        tracing::debug!(dir = %dir.display(), count = scenarios.len(), "Loaded scenario directory");
        Ok(scenarios)
    }
}
