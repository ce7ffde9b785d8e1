use tohit_core::{
    CombatActor, Difficulty, Environment, HitLocation, TargetSnapshot, Weapon, WeaponKind,
    WeaponPerk, determine_to_hit, evaluate,
};

const PERKS: [WeaponPerk; 5] = [
    WeaponPerk::None,
    WeaponPerk::Accurate,
    WeaponPerk::LongRange,
    WeaponPerk::ScopeRange,
    WeaponPerk::NightSight,
];

const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Wimpy, Difficulty::Rough];

fn attackers() -> Vec<CombatActor> {
    let mut out = Vec::new();
    for perception in [0, 1, 5, 10] {
        for skill in [0, 55, 150, 300] {
            out.push(
                CombatActor::player(6, perception)
                    .with_skills(skill, skill, skill)
                    .with_sharpshooter(perception / 3),
            );
            out.push(
                CombatActor::npc(6, perception)
                    .with_skills(skill, skill, skill)
                    .with_damaged_eye(skill % 2 == 0),
            );
        }
    }
    out
}

fn targets() -> Vec<TargetSnapshot> {
    vec![
        TargetSnapshot::none(),
        TargetSnapshot::new(0),
        TargetSnapshot::new(25).with_lumination(0x4000),
        TargetSnapshot::new(5)
            .with_lumination(0xA000)
            .with_multihex(true)
            .with_lying_down(true),
    ]
}

#[test]
fn chance_never_exceeds_ninety_five() {
    for attacker in attackers() {
        for target in targets() {
            for perk in PERKS {
                for kind in [WeaponKind::Unarmed, WeaponKind::Melee, WeaponKind::Ranged] {
                    let weapon = Weapon::new(kind).with_perk(perk);
                    for distance in [-1, 0, 3, 8, 40] {
                        for difficulty in DIFFICULTIES {
                            let env = Environment::new(distance).with_difficulty(difficulty);
                            let chance = determine_to_hit(&attacker, &target, Some(&weapon), &env);
                            assert!(chance <= 95, "{chance} for {attacker:?} {target:?} {weapon:?}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let attacker = CombatActor::player(4, 8)
        .with_skills(30, 60, 90)
        .with_sharpshooter(1);
    let target = TargetSnapshot::new(15).with_lumination(0x9000);
    let weapon = Weapon::ranged()
        .with_perk(WeaponPerk::ScopeRange)
        .with_strength_requirement(6);
    let env = Environment::new(12)
        .with_intervening_objects(2)
        .with_location(HitLocation::Groin);

    let first = evaluate(&attacker, &target, Some(&weapon), &env);
    let second = evaluate(&attacker, &target, Some(&weapon), &env);
    assert_eq!(first, second);
    assert_eq!(
        determine_to_hit(&attacker, &target, Some(&weapon), &env),
        first.chance
    );
}

#[test]
fn unarmed_ignores_strength_and_weapon_skills() {
    let target = TargetSnapshot::new(3).with_lumination(0x7000);
    let env = Environment::new(1).with_location_penalty(-30);

    let baseline = determine_to_hit(
        &CombatActor::player(1, 5).with_skills(70, 0, 0),
        &target,
        None,
        &env,
    );

    for strength in [1, 5, 10] {
        let attacker = CombatActor::player(strength, 5)
            .with_skills(70, strength * 10, strength * 5)
            .with_one_hander(true)
            .with_weapon_handling(true);
        assert_eq!(determine_to_hit(&attacker, &target, None, &env), baseline);
    }

    // 70 - 3 (AC) - 15 (half location) - 25 (light)
    assert_eq!(baseline, 27);
}

#[test]
fn breakdown_agrees_with_scalar_result() {
    for attacker in attackers() {
        for target in targets() {
            for perk in PERKS {
                let weapon = Weapon::ranged().with_perk(perk);
                let env = Environment::new(6).with_intervening_objects(1);
                let out = evaluate(&attacker, &target, Some(&weapon), &env);
                let sum: i32 = out.contributions().iter().map(|(_, v)| v).sum();
                assert_eq!(out.base + sum, out.total);
                assert_eq!(out.chance, out.total.min(95));
                assert!(out.is_ranged());
            }
        }
    }
}

#[test]
fn night_sight_removes_lighting_penalty() {
    let player = CombatActor::player(5, 5).with_skills(0, 50, 0);
    let env = Environment::new(1);
    let weapon = Weapon::melee().with_perk(WeaponPerk::NightSight);

    for lumination in [0, 0x6666, 0x9999, 0xCCCC, 0x10000] {
        let target = TargetSnapshot::new(0).with_lumination(lumination);
        assert_eq!(evaluate(&player, &target, Some(&weapon), &env).lighting, 0);
    }
}
