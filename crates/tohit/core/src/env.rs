//! Combat environment surrounding a single attack.

use crate::error::InputError;
use crate::location::HitLocation;

/// Combat difficulty setting.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Normal,
    /// Easier for the player: enemies hit less often
    Wimpy,
    /// Harder for the player: enemies hit more often
    Rough,
}

/// Whether the attack resolved to a usable attack type.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackType {
    /// Unarmed or weapon attack, resolved from the weapon slot
    #[default]
    Standard,
    /// Degenerate attack: the base chance is zero
    Invalid,
}

/// Scalar context supplied by the caller's collaborators (map geometry,
/// called-shot selection, game options).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Environment {
    /// Hex distance between attacker and target centers; `-1` when either
    /// occupies several hexes.
    pub hex_distance: i32,
    /// Objects between attacker and target. Which objects count is up to
    /// the caller.
    pub intervening_objects: i32,
    /// Called-shot penalty (see [`HitLocation::penalty`]).
    pub location_penalty: i32,
    pub difficulty: Difficulty,
    /// Attack ignores range: suppresses a non-positive range term and the
    /// intervening-object penalty.
    pub no_range: bool,
    pub attack_type: AttackType,
}

impl Environment {
    pub const MULTIHEX_DISTANCE: i32 = -1;

    pub const fn new(hex_distance: i32) -> Self {
        Self {
            hex_distance,
            intervening_objects: 0,
            location_penalty: 0,
            difficulty: Difficulty::Normal,
            no_range: false,
            attack_type: AttackType::Standard,
        }
    }

    #[must_use]
    pub const fn with_intervening_objects(mut self, count: i32) -> Self {
        self.intervening_objects = count;
        self
    }

    #[must_use]
    pub const fn with_location_penalty(mut self, penalty: i32) -> Self {
        self.location_penalty = penalty;
        self
    }

    #[must_use]
    pub const fn with_location(self, location: HitLocation) -> Self {
        self.with_location_penalty(location.penalty())
    }

    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub const fn with_no_range(mut self, no_range: bool) -> Self {
        self.no_range = no_range;
        self
    }

    #[must_use]
    pub const fn with_attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.hex_distance < Self::MULTIHEX_DISTANCE {
            return Err(InputError::DistanceBelowSentinel(self.hex_distance));
        }
        if self.intervening_objects < 0 {
            return Err(InputError::NegativeObjectCount(self.intervening_objects));
        }
        Ok(())
    }
}
