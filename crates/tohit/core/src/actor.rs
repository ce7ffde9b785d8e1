//! Attacker snapshot.

use crate::error::InputError;
use crate::weapon::WeaponKind;

/// Everything the formula reads about the attacking combatant.
///
/// Skill values are already resolved by the caller (the relevant skill per
/// weapon category). `sharpshooter_level`, `weapon_handling` and `one_hander`
/// are player-only and ignored when `is_player` is false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatActor {
    pub is_player: bool,
    pub skill_unarmed: i32,
    pub skill_ranged: i32,
    pub skill_melee: i32,
    pub strength: i32,
    pub perception: i32,
    pub damaged_eye: bool,
    pub sharpshooter_level: i32,
    pub weapon_handling: bool,
    pub one_hander: bool,
    pub on_player_team: bool,
}

impl CombatActor {
    /// Creates the player character with the given core stats.
    pub const fn player(strength: i32, perception: i32) -> Self {
        Self {
            is_player: true,
            skill_unarmed: 0,
            skill_ranged: 0,
            skill_melee: 0,
            strength,
            perception,
            damaged_eye: false,
            sharpshooter_level: 0,
            weapon_handling: false,
            one_hander: false,
            on_player_team: true,
        }
    }

    /// Creates a non-player combatant outside the player's team.
    pub const fn npc(strength: i32, perception: i32) -> Self {
        Self {
            is_player: false,
            on_player_team: false,
            ..Self::player(strength, perception)
        }
    }

    #[must_use]
    pub const fn with_skills(mut self, unarmed: i32, melee: i32, ranged: i32) -> Self {
        self.skill_unarmed = unarmed;
        self.skill_melee = melee;
        self.skill_ranged = ranged;
        self
    }

    #[must_use]
    pub const fn with_damaged_eye(mut self, damaged_eye: bool) -> Self {
        self.damaged_eye = damaged_eye;
        self
    }

    #[must_use]
    pub const fn with_sharpshooter(mut self, level: i32) -> Self {
        self.sharpshooter_level = level;
        self
    }

    #[must_use]
    pub const fn with_weapon_handling(mut self, weapon_handling: bool) -> Self {
        self.weapon_handling = weapon_handling;
        self
    }

    #[must_use]
    pub const fn with_one_hander(mut self, one_hander: bool) -> Self {
        self.one_hander = one_hander;
        self
    }

    #[must_use]
    pub const fn with_player_team(mut self, on_player_team: bool) -> Self {
        self.on_player_team = on_player_team;
        self
    }

    /// Skill used for an attack with a weapon of the given kind.
    pub const fn skill_for(&self, kind: WeaponKind) -> i32 {
        match kind {
            WeaponKind::Unarmed => self.skill_unarmed,
            WeaponKind::Melee => self.skill_melee,
            WeaponKind::Ranged => self.skill_ranged,
        }
    }

    /// Sharpshooter rank as seen by the range formula (zero for NPCs).
    pub const fn effective_sharpshooter(&self) -> i32 {
        if self.is_player {
            self.sharpshooter_level
        } else {
            0
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.perception < 0 {
            return Err(InputError::NegativePerception(self.perception));
        }
        if self.strength < 0 {
            return Err(InputError::NegativeStrength(self.strength));
        }
        if self.sharpshooter_level < 0 {
            return Err(InputError::NegativeSharpshooter(self.sharpshooter_level));
        }
        Ok(())
    }
}
