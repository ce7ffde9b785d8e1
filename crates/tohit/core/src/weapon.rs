//! Equipped weapon snapshot.

use crate::config::ToHitConfig;
use crate::error::InputError;

/// Broad weapon category, used to pick the attacker's skill.
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
pub enum WeaponKind {
    /// Fists, kicks and knuckle-style weapons
    #[default]
    Unarmed,
    /// Blades, clubs, spears
    Melee,
    /// Anything fired or thrown at a distance
    Ranged,
}

/// Weapon perk relevant to hit chance.
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
pub enum WeaponPerk {
    #[default]
    None,
    /// Flat bonus to the base chance
    Accurate,
    /// Doubles the perception contribution to range
    LongRange,
    /// Larger perception contribution, with a minimum range
    ScopeRange,
    /// Ignores lighting penalties
    NightSight,
}

impl WeaponPerk {
    /// Perception multiplier and scope minimum range used by the range formula.
    ///
    /// The second coefficient is zero for everything except scoped weapons,
    /// which disables the minimum-range branch.
    pub const fn range_coefficients(self) -> (i32, i32) {
        match self {
            Self::LongRange => (ToHitConfig::LONG_RANGE_COEFFICIENT, 0),
            Self::ScopeRange => (
                ToHitConfig::SCOPE_RANGE_COEFFICIENT,
                ToHitConfig::SCOPE_MINIMUM_RANGE,
            ),
            _ => (ToHitConfig::DEFAULT_RANGE_COEFFICIENT, 0),
        }
    }
}

/// Weapon in the attacker's active slot.
///
/// An absent weapon (`None` wherever `Option<&Weapon>` is taken) is an
/// unarmed attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Weapon {
    pub kind: WeaponKind,
    pub two_handed: bool,
    /// Added to the target's armor class; usually zero or negative.
    pub armor_class_modifier: i32,
    pub strength_requirement: i32,
    pub perk: WeaponPerk,
}

impl Weapon {
    pub const fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            two_handed: false,
            armor_class_modifier: 0,
            strength_requirement: 0,
            perk: WeaponPerk::None,
        }
    }

    pub const fn melee() -> Self {
        Self::new(WeaponKind::Melee)
    }

    pub const fn ranged() -> Self {
        Self::new(WeaponKind::Ranged)
    }

    #[must_use]
    pub const fn with_two_handed(mut self, two_handed: bool) -> Self {
        self.two_handed = two_handed;
        self
    }

    #[must_use]
    pub const fn with_armor_class_modifier(mut self, modifier: i32) -> Self {
        self.armor_class_modifier = modifier;
        self
    }

    #[must_use]
    pub const fn with_strength_requirement(mut self, requirement: i32) -> Self {
        self.strength_requirement = requirement;
        self
    }

    #[must_use]
    pub const fn with_perk(mut self, perk: WeaponPerk) -> Self {
        self.perk = perk;
        self
    }

    pub const fn is_ranged(&self) -> bool {
        matches!(self.kind, WeaponKind::Ranged)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.strength_requirement < 0 {
            return Err(InputError::NegativeStrengthRequirement(
                self.strength_requirement,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn range_coefficients_per_perk() {
        assert_eq!(WeaponPerk::LongRange.range_coefficients(), (4, 0));
        assert_eq!(WeaponPerk::ScopeRange.range_coefficients(), (5, 8));
        assert_eq!(WeaponPerk::None.range_coefficients(), (2, 0));
        assert_eq!(WeaponPerk::Accurate.range_coefficients(), (2, 0));
        assert_eq!(WeaponPerk::NightSight.range_coefficients(), (2, 0));
    }

    #[test]
    fn perk_names_parse_case_insensitively() {
        assert_eq!(
            WeaponPerk::from_str("Scope_Range").unwrap(),
            WeaponPerk::ScopeRange
        );
        assert_eq!(WeaponKind::from_str("RANGED").unwrap(), WeaponKind::Ranged);
        let name: &str = WeaponPerk::NightSight.as_ref();
        assert_eq!(name, "night_sight");
    }

    #[test]
    fn negative_strength_requirement_is_rejected() {
        let weapon = Weapon::melee().with_strength_requirement(-1);
        assert_eq!(
            weapon.validate(),
            Err(InputError::NegativeStrengthRequirement(-1))
        );
        assert!(Weapon::ranged().validate().is_ok());
    }
}
