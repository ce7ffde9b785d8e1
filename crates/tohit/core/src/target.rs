//! Target snapshot.

use crate::config::ToHitConfig;
use crate::error::InputError;

/// What the formula reads about the target.
///
/// `valid == false` means no target is selected. Armor class and lighting
/// then contribute nothing regardless of the other fields.
///
/// The default is [`TargetSnapshot::none`]. Its lumination is full light, so
/// a deserialized target that sets `valid` but omits `lumination` is lit
/// rather than pitch dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetSnapshot {
    pub valid: bool,
    pub armor_class: i32,
    /// Light level on the target's hex, `0..=0x10000`.
    pub lumination: i32,
    pub multihex: bool,
    pub lying_down: bool,
}

impl TargetSnapshot {
    /// A selected target with the given armor class, standing in full light.
    pub const fn new(armor_class: i32) -> Self {
        Self {
            valid: true,
            armor_class,
            lumination: ToHitConfig::FULL_LIGHT,
            multihex: false,
            lying_down: false,
        }
    }

    /// No target selected.
    pub const fn none() -> Self {
        Self {
            valid: false,
            armor_class: 0,
            lumination: ToHitConfig::FULL_LIGHT,
            multihex: false,
            lying_down: false,
        }
    }

    #[must_use]
    pub const fn with_lumination(mut self, lumination: i32) -> Self {
        self.lumination = lumination;
        self
    }

    #[must_use]
    pub const fn with_multihex(mut self, multihex: bool) -> Self {
        self.multihex = multihex;
        self
    }

    #[must_use]
    pub const fn with_lying_down(mut self, lying_down: bool) -> Self {
        self.lying_down = lying_down;
        self
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !(0..=ToHitConfig::FULL_LIGHT).contains(&self.lumination) {
            return Err(InputError::LuminationOutOfRange(self.lumination));
        }
        Ok(())
    }
}

impl Default for TargetSnapshot {
    fn default() -> Self {
        Self::none()
    }
}
