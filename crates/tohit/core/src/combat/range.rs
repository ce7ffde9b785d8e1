//! Distance attenuation for ranged attacks.

use crate::actor::CombatActor;
use crate::config::ToHitConfig;
use crate::env::Environment;
use crate::target::TargetSnapshot;
use crate::weapon::WeaponPerk;

/// Outcome of the range formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeModifier {
    /// Amount added to the to-hit chance (zero when suppressed by `no_range`).
    pub delta: i32,
    /// Scaled distance term before the `no_range` gate.
    pub distance: i32,
}

/// Computes the range contribution of a ranged attack.
///
/// # Formula
///
/// ```text
/// dist = target valid ? hex_distance : 0
/// if scoped and dist < 8:  dist += 8
/// else:                    dist -= (perception - [2 if player]) * coeff
/// dist = max(dist, -2 * perception)
/// dist -= 2 * sharpshooter                      (player only)
/// dist *= (dist >= 0 && damaged eye) ? -12 : -4
/// delta = (no_range && dist <= 0) ? 0 : dist
/// ```
///
/// The scope branch adds the minimum range rather than subtracting it: a
/// target inside the scope's minimum range is treated as further away.
///
/// Arithmetic saturates at the `i32` bounds, so extreme distances or stats
/// give an extreme (but finite) modifier.
///
/// The intervening-object penalty is separate, see [`intervening_penalty`].
pub fn range_modifier(
    perk: WeaponPerk,
    actor: &CombatActor,
    target: &TargetSnapshot,
    env: &Environment,
) -> RangeModifier {
    debug_assert!(actor.perception >= 0, "perception must be non-negative");
    debug_assert!(
        env.hex_distance >= Environment::MULTIHEX_DISTANCE,
        "hex distance below multihex sentinel"
    );

    let (per_perception, minimum_range) = perk.range_coefficients();
    let perception = actor.perception;

    let mut distance = if target.valid { env.hex_distance } else { 0 };

    if perk == WeaponPerk::ScopeRange && distance < minimum_range {
        distance = distance.saturating_add(minimum_range);
    } else {
        let effective_perception = if actor.is_player {
            perception.saturating_sub(ToHitConfig::PLAYER_PERCEPTION_HANDICAP)
        } else {
            perception
        };
        distance = distance.saturating_sub(effective_perception.saturating_mul(per_perception));
    }

    distance = distance.max(perception.saturating_mul(-ToHitConfig::PERCEPTION_FLOOR_FACTOR));
    distance = distance.saturating_sub(
        actor
            .effective_sharpshooter()
            .saturating_mul(ToHitConfig::SHARPSHOOTER_FACTOR),
    );

    // Eye damage only worsens the non-negative branch.
    let scale = if distance >= 0 && actor.damaged_eye {
        ToHitConfig::DAMAGED_EYE_DISTANCE_SCALE
    } else {
        ToHitConfig::DISTANCE_SCALE
    };
    distance = distance.saturating_mul(scale);

    let delta = if env.no_range && distance <= 0 {
        0
    } else {
        distance
    };

    RangeModifier { delta, distance }
}

/// Penalty for objects standing between attacker and target.
///
/// Applies once per object, only against a valid target and only when the
/// attack does not ignore range.
pub fn intervening_penalty(target: &TargetSnapshot, env: &Environment) -> i32 {
    debug_assert!(
        env.intervening_objects >= 0,
        "intervening object count must be non-negative"
    );

    if target.valid && !env.no_range {
        env.intervening_objects
            .saturating_mul(-ToHitConfig::INTERVENING_OBJECT_PENALTY)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(distance: i32) -> Environment {
        Environment::new(distance)
    }

    #[test]
    fn invalid_target_starts_from_zero() {
        // 0 - (6 - 2) * 4 = -16, floored at -12, scaled by -4
        let player = CombatActor::player(5, 6);
        let result = range_modifier(
            WeaponPerk::LongRange,
            &player,
            &TargetSnapshot::none(),
            &at(10),
        );
        assert_eq!(result, RangeModifier { delta: 48, distance: 48 });
    }

    #[test]
    fn player_perception_is_handicapped() {
        let target = TargetSnapshot::new(0);
        let env = at(20);

        // Player: 20 - (8 - 2) * 2 = 8 -> -32
        let player = CombatActor::player(5, 8);
        assert_eq!(
            range_modifier(WeaponPerk::None, &player, &target, &env).delta,
            -32
        );

        // NPC: 20 - 8 * 2 = 4 -> -16
        let npc = CombatActor::npc(5, 8);
        assert_eq!(
            range_modifier(WeaponPerk::None, &npc, &target, &env).delta,
            -16
        );
    }

    #[test]
    fn scope_inside_minimum_range_pushes_target_out() {
        let npc = CombatActor::npc(5, 8);
        let target = TargetSnapshot::new(0);

        // 3 < 8: 3 + 8 = 11, perception ignored -> -44
        let close = range_modifier(WeaponPerk::ScopeRange, &npc, &target, &at(3));
        assert_eq!(close.delta, -44);

        // 8 is not inside the minimum range: 8 - 8 * 5 = -32, floored at -16 -> 64
        let edge = range_modifier(WeaponPerk::ScopeRange, &npc, &target, &at(8));
        assert_eq!(edge.delta, 64);
    }

    #[test]
    fn minimum_range_branch_is_scope_only() {
        // The multihex sentinel must not trigger the scope branch for other perks.
        let npc = CombatActor::npc(5, 3);
        let target = TargetSnapshot::new(0);
        // -1 - 3 * 2 = -7, floor -6 -> 24
        let result = range_modifier(WeaponPerk::None, &npc, &target, &at(-1));
        assert_eq!(result.delta, 24);
    }

    #[test]
    fn floor_clamps_at_twice_perception() {
        let npc = CombatActor::npc(5, 10);
        let target = TargetSnapshot::new(0);
        // 1 - 10 * 4 = -39, floor -20 -> 80
        let result = range_modifier(WeaponPerk::LongRange, &npc, &target, &at(1));
        assert_eq!(result.delta, 80);
    }

    #[test]
    fn sharpshooter_applies_after_floor() {
        let target = TargetSnapshot::new(0);
        // 1 - (10 - 2) * 4 = -31, floor -20, minus 2 * 2 = -24 -> 96
        let player = CombatActor::player(5, 10).with_sharpshooter(2);
        let result = range_modifier(WeaponPerk::LongRange, &player, &target, &at(1));
        assert_eq!(result.delta, 96);

        // NPC rank is ignored
        let npc = CombatActor::npc(5, 10).with_sharpshooter(2);
        let result = range_modifier(WeaponPerk::LongRange, &npc, &target, &at(1));
        assert_eq!(result.delta, 80);
    }

    #[test]
    fn damaged_eye_triples_only_non_negative_distance() {
        let target = TargetSnapshot::new(0);

        // 20 - 5 * 2 = 10 -> -120
        let far = CombatActor::npc(5, 5).with_damaged_eye(true);
        assert_eq!(
            range_modifier(WeaponPerk::None, &far, &target, &at(20)).delta,
            -120
        );

        // Exactly zero stays zero either way
        assert_eq!(
            range_modifier(WeaponPerk::None, &far, &target, &at(10)).delta,
            0
        );

        // 2 - 5 * 2 = -8 -> 32, no eye penalty on the negative branch
        assert_eq!(
            range_modifier(WeaponPerk::None, &far, &target, &at(2)).delta,
            32
        );
    }

    #[test]
    fn no_range_suppresses_non_positive_term_only() {
        let npc = CombatActor::npc(5, 5);
        let target = TargetSnapshot::new(0);

        // Far: -40 is non-positive, suppressed
        let far = range_modifier(
            WeaponPerk::None,
            &npc,
            &target,
            &at(20).with_no_range(true),
        );
        assert_eq!(far, RangeModifier { delta: 0, distance: -40 });

        // Close: +32 is a bonus, kept
        let close = range_modifier(
            WeaponPerk::None,
            &npc,
            &target,
            &at(2).with_no_range(true),
        );
        assert_eq!(close, RangeModifier { delta: 32, distance: 32 });
    }

    #[test]
    fn scope_at_multihex_sentinel_is_inside_minimum_range() {
        // -1 < 8: -1 + 8 = 7 -> -28
        let npc = CombatActor::npc(5, 5);
        let result = range_modifier(
            WeaponPerk::ScopeRange,
            &npc,
            &TargetSnapshot::new(0),
            &at(Environment::MULTIHEX_DISTANCE),
        );
        assert_eq!(result, RangeModifier { delta: -28, distance: -28 });
    }

    #[test]
    fn extreme_distance_saturates() {
        let npc = CombatActor::npc(5, 5).with_damaged_eye(true);
        let result = range_modifier(
            WeaponPerk::None,
            &npc,
            &TargetSnapshot::new(0),
            &at(1_000_000_000),
        );
        assert_eq!(result.delta, i32::MIN);

        let env = at(5).with_intervening_objects(i32::MAX);
        assert_eq!(intervening_penalty(&TargetSnapshot::new(0), &env), i32::MIN);
    }

    #[test]
    fn extreme_perception_and_sharpshooter_saturate() {
        // Perception term saturates low, floor saturates low, scaled by -4
        let npc = CombatActor::npc(5, i32::MAX);
        let result = range_modifier(WeaponPerk::LongRange, &npc, &TargetSnapshot::new(0), &at(3));
        assert_eq!(result.delta, i32::MAX);

        let player = CombatActor::player(5, 5).with_sharpshooter(i32::MAX);
        let result = range_modifier(WeaponPerk::None, &player, &TargetSnapshot::new(0), &at(3));
        assert_eq!(result.delta, i32::MAX);
    }

    #[test]
    fn intervening_objects_need_valid_target_and_range() {
        let env = Environment::new(5).with_intervening_objects(3);
        assert_eq!(intervening_penalty(&TargetSnapshot::new(0), &env), -30);
        assert_eq!(intervening_penalty(&TargetSnapshot::none(), &env), 0);
        assert_eq!(
            intervening_penalty(&TargetSnapshot::new(0), &env.with_no_range(true)),
            0
        );
    }
}
