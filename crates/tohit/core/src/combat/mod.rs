//! To-hit resolution.
//!
//! This module provides pure functions for computing the chance that an
//! attack connects. All logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `determine_to_hit`: Final clamped chance for one attack
//! - `evaluate`: Same pipeline, reporting every rule's contribution
//! - `range_modifier`: Distance attenuation for ranged weapons
//! - `intervening_penalty`: Penalty for objects in the line of fire
//! - `lighting_penalty`: Lighting tier table (player attackers)

pub mod breakdown;
pub mod hit;
pub mod range;

pub use breakdown::ToHitBreakdown;
pub use hit::{determine_to_hit, evaluate, lighting_penalty};
pub use range::{RangeModifier, intervening_penalty, range_modifier};
