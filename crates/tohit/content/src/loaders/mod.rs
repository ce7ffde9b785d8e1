//! Content loaders for reading attack scenarios from files.
//!
//! This module converts RON/TOML files into [`crate::Scenario`] values.

pub mod scenario;

pub use scenario::{ScenarioFormat, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
