//! Data-driven attack scenarios and loaders.
//!
//! A [`Scenario`] bundles the four snapshots the to-hit formula reads
//! (attacker, target, weapon, environment) so that attacks can be described
//! in RON or TOML files and evaluated offline.
//!
//! All loaders use tohit-core types directly with serde for deserialization.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::Scenario;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, ScenarioFormat, ScenarioLoader};
