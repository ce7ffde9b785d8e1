//! Step-by-step record of a to-hit evaluation.

use super::range::RangeModifier;

/// Signed contribution of every rule applied to one attack.
///
/// Produced by [`super::evaluate`]. `total` is the running sum before the
/// upper clamp and `chance` the clamped value that
/// [`super::determine_to_hit`] returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToHitBreakdown {
    /// Resolved skill (or zero for an invalid attack type).
    pub base: i32,
    /// Present when the weapon is ranged.
    pub range: Option<RangeModifier>,
    pub intervening_objects: i32,
    pub one_hander: i32,
    pub strength: i32,
    pub accurate: i32,
    pub armor_class: i32,
    pub location: i32,
    pub multihex: i32,
    pub lighting: i32,
    pub damaged_eye: i32,
    pub lying_down: i32,
    pub difficulty: i32,
    /// Sum of all contributions, unclamped.
    pub total: i32,
    /// Final chance after the upper clamp.
    pub chance: i32,
}

impl ToHitBreakdown {
    /// Whether the attack was evaluated as ranged.
    pub const fn is_ranged(&self) -> bool {
        self.range.is_some()
    }

    /// Range delta actually added to the chance (zero for non-ranged attacks).
    pub fn range_delta(&self) -> i32 {
        self.range.map_or(0, |range| range.delta)
    }

    /// Named, non-base contributions in pipeline order.
    pub fn contributions(&self) -> [(&'static str, i32); 12] {
        [
            ("range", self.range_delta()),
            ("intervening_objects", self.intervening_objects),
            ("one_hander", self.one_hander),
            ("strength", self.strength),
            ("accurate", self.accurate),
            ("armor_class", self.armor_class),
            ("location", self.location),
            ("multihex", self.multihex),
            ("lighting", self.lighting),
            ("damaged_eye", self.damaged_eye),
            ("lying_down", self.lying_down),
            ("difficulty", self.difficulty),
        ]
    }

    /// Whether the upper clamp lowered the chance.
    pub const fn is_clamped(&self) -> bool {
        self.chance != self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melee_breakdown_has_no_range() {
        let breakdown = ToHitBreakdown {
            base: 50,
            total: 50,
            chance: 50,
            ..Default::default()
        };
        assert!(!breakdown.is_ranged());
        assert_eq!(breakdown.range_delta(), 0);
        assert!(!breakdown.is_clamped());
    }

    #[test]
    fn contributions_sum_with_base_to_total() {
        let breakdown = ToHitBreakdown {
            base: 60,
            range: Some(RangeModifier {
                delta: -8,
                distance: -8,
            }),
            armor_class: -5,
            lighting: -10,
            total: 37,
            chance: 37,
            ..Default::default()
        };
        let sum: i32 = breakdown.contributions().iter().map(|(_, v)| v).sum();
        assert_eq!(breakdown.base + sum, breakdown.total);
        assert!(breakdown.is_ranged());
    }
}
