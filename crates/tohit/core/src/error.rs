//! Caller-contract violations.
//!
//! The formula itself is total: every input in its declared domain yields a
//! number and nothing in [`crate::combat`] returns a `Result`. Inputs outside
//! that domain (negative perception, a distance below the multihex sentinel,
//! ...) are programming errors on the caller's side. The formula only
//! `debug_assert!`s them; callers that accept snapshots from untrusted sources
//! (scenario files, user input) run the `validate` methods on each snapshot
//! and get one of these variants back.

/// A snapshot field outside the domain the formula is defined on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputError {
    #[error("perception must be non-negative, got {0}")]
    NegativePerception(i32),

    #[error("strength must be non-negative, got {0}")]
    NegativeStrength(i32),

    #[error("sharpshooter level must be non-negative, got {0}")]
    NegativeSharpshooter(i32),

    #[error("intervening object count must be non-negative, got {0}")]
    NegativeObjectCount(i32),

    #[error("hex distance must be at least -1, got {0}")]
    DistanceBelowSentinel(i32),

    #[error("target lumination must be within 0..=0x10000, got {0:#x}")]
    LuminationOutOfRange(i32),

    #[error("strength requirement must be non-negative, got {0}")]
    NegativeStrengthRequirement(i32),
}

impl InputError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativePerception(_) => "negative_perception",
            Self::NegativeStrength(_) => "negative_strength",
            Self::NegativeSharpshooter(_) => "negative_sharpshooter",
            Self::NegativeObjectCount(_) => "negative_object_count",
            Self::DistanceBelowSentinel(_) => "distance_below_sentinel",
            Self::LuminationOutOfRange(_) => "lumination_out_of_range",
            Self::NegativeStrengthRequirement(_) => "negative_strength_requirement",
        }
    }
}
