//! Called-shot body locations.
//!
//! The formula only consumes a signed `location_penalty`; this table is the
//! usual source of that number.

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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HitLocation {
    /// No called shot
    #[default]
    Uncalled,
    Torso,
    Head,
    Eyes,
    Groin,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl HitLocation {
    /// To-hit penalty for aiming at this location (zero or negative).
    pub const fn penalty(self) -> i32 {
        match self {
            Self::Uncalled | Self::Torso => 0,
            Self::Head => -40,
            Self::Eyes => -60,
            Self::Groin | Self::LeftArm | Self::RightArm => -30,
            Self::LeftLeg | Self::RightLeg => -20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn penalties_are_never_positive() {
        assert!(HitLocation::iter().all(|loc| loc.penalty() <= 0));
    }

    #[test]
    fn eyes_are_hardest() {
        let hardest = HitLocation::iter().min_by_key(|loc| loc.penalty());
        assert_eq!(hardest, Some(HitLocation::Eyes));
        assert_eq!(HitLocation::Head.penalty(), -40);
        assert_eq!(HitLocation::RightLeg.penalty(), -20);
    }
}
