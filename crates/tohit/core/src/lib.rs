//! Deterministic combat hit-chance ("to-hit") formula.
//!
//! `tohit-core` computes the integer percentage chance that an attack connects,
//! given immutable snapshots of the attacker, the target, the equipped weapon
//! (if any) and the surrounding combat environment. Every function is pure:
//! nothing is mutated, nothing is rolled, nothing is logged.
//!
//! The pipeline has two stages:
//!
//! - [`combat::range_modifier`] attenuates the chance by hex distance for
//!   ranged weapons (perception, range perks, sharpshooter, damaged eye).
//! - [`combat::determine_to_hit`] resolves the base skill and layers weapon
//!   handling, strength, range, armor class, called-shot location, lighting,
//!   posture and difficulty on top of it before the upper clamp.
//!
//! [`combat::evaluate`] runs the same pipeline and reports every step's
//! contribution, which is what calculators and debugging tools want.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod actor;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod location;
pub mod target;
pub mod weapon;

pub use actor::CombatActor;
pub use combat::{
    RangeModifier, ToHitBreakdown, determine_to_hit, evaluate, intervening_penalty,
    lighting_penalty, range_modifier,
};
pub use config::ToHitConfig;
pub use env::{AttackType, Difficulty, Environment};
pub use error::InputError;
pub use location::HitLocation;
pub use target::TargetSnapshot;
pub use weapon::{Weapon, WeaponKind, WeaponPerk};
