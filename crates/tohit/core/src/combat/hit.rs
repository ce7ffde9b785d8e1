//! Hit chance calculation.

use crate::actor::CombatActor;
use crate::config::ToHitConfig;
use crate::env::{AttackType, Difficulty, Environment};
use crate::target::TargetSnapshot;
use crate::weapon::{Weapon, WeaponKind, WeaponPerk};

use super::breakdown::ToHitBreakdown;
use super::range::{intervening_penalty, range_modifier};

/// Calculate the chance (in percent) that an attack connects.
///
/// The result is clamped from above to [`ToHitConfig::MAX_CHANCE`] only; it
/// can be zero or negative, which callers treat as a near-certain miss.
///
/// # Arguments
///
/// * `attacker` - Snapshot of the attacking combatant
/// * `target` - Snapshot of the target (`valid == false` when none is selected)
/// * `weapon` - Equipped weapon, `None` for an unarmed attack
/// * `env` - Distance, called-shot penalty and game options
pub fn determine_to_hit(
    attacker: &CombatActor,
    target: &TargetSnapshot,
    weapon: Option<&Weapon>,
    env: &Environment,
) -> i32 {
    evaluate(attacker, target, weapon, env).chance
}

/// Evaluate the to-hit pipeline and report each rule's contribution.
///
/// Rules apply in a fixed order with no intermediate clamping:
///
/// 1. Base skill (unarmed, or the weapon's skill plus range, one-hander,
///    strength and accurate adjustments)
/// 2. Armor class, when the target is valid and the combined value is positive
/// 3. Called-shot location (halved for non-ranged attacks)
/// 4. Multihex target, lighting (player only), damaged eye, lying target
/// 5. Difficulty (attackers outside the player's team)
/// 6. Upper clamp
///
/// Sums saturate at the `i32` bounds, so out-of-scale inputs that still pass
/// validation yield an extreme chance rather than overflowing.
pub fn evaluate(
    attacker: &CombatActor,
    target: &TargetSnapshot,
    weapon: Option<&Weapon>,
    env: &Environment,
) -> ToHitBreakdown {
    debug_assert!(attacker.validate().is_ok(), "invalid attacker snapshot");
    debug_assert!(target.validate().is_ok(), "invalid target snapshot");
    debug_assert!(
        weapon.is_none_or(|weapon| weapon.validate().is_ok()),
        "invalid weapon snapshot"
    );
    debug_assert!(env.validate().is_ok(), "invalid environment");

    let mut out = ToHitBreakdown::default();
    let use_armor_class = target.valid;

    // 1. Base value
    match (env.attack_type, weapon) {
        (AttackType::Invalid, _) => {}
        (AttackType::Standard, None) => out.base = attacker.skill_unarmed,
        (AttackType::Standard, Some(weapon)) if weapon.kind == WeaponKind::Unarmed => {
            out.base = attacker.skill_unarmed;
        }
        (AttackType::Standard, Some(weapon)) => apply_weapon(&mut out, attacker, target, weapon, env),
    }

    // 2. Armor class; armor can never help the attacker
    if use_armor_class {
        let armor_class = target
            .armor_class
            .saturating_add(weapon.map_or(0, |weapon| weapon.armor_class_modifier));
        if armor_class > 0 {
            out.armor_class = -armor_class;
        }
    }

    // 3. Called shot; integer division truncates toward zero
    out.location = if out.is_ranged() {
        env.location_penalty
    } else {
        env.location_penalty / 2
    };

    // 4. Target and attacker condition
    if target.multihex {
        out.multihex = ToHitConfig::MULTIHEX_BONUS;
    }

    if attacker.is_player {
        let perk = weapon.map_or(WeaponPerk::None, |weapon| weapon.perk);
        out.lighting = lighting_penalty(effective_light(target, perk));
    }

    if attacker.damaged_eye {
        out.damaged_eye = -ToHitConfig::DAMAGED_EYE_PENALTY;
    }

    if target.lying_down {
        out.lying_down = ToHitConfig::LYING_DOWN_BONUS;
    }

    // 5. Difficulty
    if !attacker.on_player_team {
        out.difficulty = match env.difficulty {
            Difficulty::Normal => 0,
            Difficulty::Wimpy => ToHitConfig::DIFFICULTY_ADJUSTMENT,
            Difficulty::Rough => -ToHitConfig::DIFFICULTY_ADJUSTMENT,
        };
    }

    // 6. Clamp
    out.total = out
        .contributions()
        .iter()
        .fold(out.base, |total, (_, value)| total.saturating_add(*value));
    out.chance = out.total.min(ToHitConfig::MAX_CHANCE);
    out
}

fn apply_weapon(
    out: &mut ToHitBreakdown,
    attacker: &CombatActor,
    target: &TargetSnapshot,
    weapon: &Weapon,
    env: &Environment,
) {
    out.base = attacker.skill_for(weapon.kind);

    if weapon.is_ranged() {
        out.range = Some(range_modifier(weapon.perk, attacker, target, env));
        out.intervening_objects = intervening_penalty(target, env);
    }

    if attacker.is_player && attacker.one_hander {
        out.one_hander = if weapon.two_handed {
            -ToHitConfig::ONE_HANDER_PENALTY
        } else {
            ToHitConfig::ONE_HANDER_BONUS
        };
    }

    let strength = if attacker.is_player && attacker.weapon_handling {
        attacker
            .strength
            .saturating_add(ToHitConfig::WEAPON_HANDLING_STRENGTH)
    } else {
        attacker.strength
    };
    if weapon.strength_requirement > strength {
        out.strength = weapon
            .strength_requirement
            .saturating_sub(strength)
            .saturating_mul(-ToHitConfig::STRENGTH_PENALTY_PER_POINT);
    }

    if weapon.perk == WeaponPerk::Accurate {
        out.accurate = ToHitConfig::ACCURATE_BONUS;
    }
}

/// Light level the lighting rule sees.
fn effective_light(target: &TargetSnapshot, perk: WeaponPerk) -> i32 {
    if !target.valid {
        0
    } else if perk == WeaponPerk::NightSight {
        ToHitConfig::FULL_LIGHT
    } else {
        target.lumination
    }
}

/// Lighting penalty tier for a light level.
///
/// ```text
/// (0xCCCC, ..)       ->   0
/// (0x9999, 0xCCCC]   -> -10
/// (0x6666, 0x9999]   -> -25
/// (.., 0x6666]       -> -40
/// ```
pub const fn lighting_penalty(light: i32) -> i32 {
    if light > ToHitConfig::DIM_LIGHT_THRESHOLD {
        0
    } else if light > ToHitConfig::DARK_LIGHT_THRESHOLD {
        -ToHitConfig::DIM_LIGHT_PENALTY
    } else if light > ToHitConfig::BLACK_LIGHT_THRESHOLD {
        -ToHitConfig::DARK_LIGHT_PENALTY
    } else {
        -ToHitConfig::BLACK_LIGHT_PENALTY
    }
}
