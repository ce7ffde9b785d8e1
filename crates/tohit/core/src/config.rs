/// Fixed constants of the to-hit formula.
///
/// The formula has no runtime-tunable state; every adjustment it applies is
/// named here so the pipeline reads as a sequence of named rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToHitConfig;

impl ToHitConfig {
    // ===== final clamp =====
    /// Upper bound of the returned chance. There is no lower bound.
    pub const MAX_CHANCE: i32 = 95;

    // ===== weapon handling =====
    /// One Hander trait penalty when wielding a two-handed weapon.
    pub const ONE_HANDER_PENALTY: i32 = 40;
    /// One Hander trait bonus when wielding a one-handed weapon.
    pub const ONE_HANDER_BONUS: i32 = 20;
    /// Strength added by the Weapon Handling perk when checking requirements.
    pub const WEAPON_HANDLING_STRENGTH: i32 = 3;
    /// Penalty per point of missing strength.
    pub const STRENGTH_PENALTY_PER_POINT: i32 = 20;
    /// Bonus granted by the Accurate weapon perk.
    pub const ACCURATE_BONUS: i32 = 20;

    // ===== range attenuation =====
    /// Perception multiplier for Long Range weapons.
    pub const LONG_RANGE_COEFFICIENT: i32 = 4;
    /// Perception multiplier for scoped weapons.
    pub const SCOPE_RANGE_COEFFICIENT: i32 = 5;
    /// Minimum range of scoped weapons; closer targets are pushed out by this much.
    pub const SCOPE_MINIMUM_RANGE: i32 = 8;
    /// Perception multiplier for every other weapon.
    pub const DEFAULT_RANGE_COEFFICIENT: i32 = 2;
    /// Flat perception handicap applied to the player in the range formula only.
    pub const PLAYER_PERCEPTION_HANDICAP: i32 = 2;
    /// Floor of the attenuated distance, as a multiple of perception (negated).
    pub const PERCEPTION_FLOOR_FACTOR: i32 = 2;
    /// Distance reduction per Sharpshooter rank.
    pub const SHARPSHOOTER_FACTOR: i32 = 2;
    /// Distance scale for a healthy attacker, and for every negative distance.
    pub const DISTANCE_SCALE: i32 = -4;
    /// Distance scale for an attacker with a damaged eye (non-negative distance only).
    pub const DAMAGED_EYE_DISTANCE_SCALE: i32 = -12;
    /// Penalty per object standing between attacker and target.
    pub const INTERVENING_OBJECT_PENALTY: i32 = 10;

    // ===== target =====
    /// Bonus against targets occupying more than one hex.
    pub const MULTIHEX_BONUS: i32 = 15;
    /// Bonus against targets lying on the ground.
    pub const LYING_DOWN_BONUS: i32 = 40;

    // ===== lighting (player attackers only) =====
    /// Lumination of a fully lit target, also forced by the Night Sight perk.
    pub const FULL_LIGHT: i32 = 0x10000;
    /// Above this, lighting applies no penalty.
    pub const DIM_LIGHT_THRESHOLD: i32 = 0xCCCC;
    /// Upper bound (inclusive) of the "dark" tier.
    pub const DARK_LIGHT_THRESHOLD: i32 = 0x9999;
    /// Upper bound (inclusive) of the "pitch black" tier.
    pub const BLACK_LIGHT_THRESHOLD: i32 = 0x6666;
    pub const DIM_LIGHT_PENALTY: i32 = 10;
    pub const DARK_LIGHT_PENALTY: i32 = 25;
    pub const BLACK_LIGHT_PENALTY: i32 = 40;

    // ===== attacker condition =====
    pub const DAMAGED_EYE_PENALTY: i32 = 25;

    // ===== difficulty (attackers outside the player's team) =====
    pub const DIFFICULTY_ADJUSTMENT: i32 = 20;
}
