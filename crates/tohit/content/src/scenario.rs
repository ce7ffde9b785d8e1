//! Attack scenario definition.

use serde::{Deserialize, Serialize};
use tohit_core::{
    CombatActor, Environment, InputError, TargetSnapshot, ToHitBreakdown, Weapon, evaluate,
};

/// One attack, described by the snapshots the formula consumes.
///
/// Every field has a default, so files only spell out what differs from an
/// unarmed attack with no target selected.
/// A target marked `valid` without a `lumination` stands in full light.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Optional label shown by tools.
    pub name: Option<String>,
    pub attacker: CombatActor,
    pub target: TargetSnapshot,
    /// `None` for an unarmed attack.
    pub weapon: Option<Weapon>,
    pub environment: Environment,
}

impl Scenario {
    pub fn new(attacker: CombatActor, target: TargetSnapshot, environment: Environment) -> Self {
        Self {
            name: None,
            attacker,
            target,
            weapon: None,
            environment,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Checks every snapshot against the formula's input domain.
    pub fn validate(&self) -> Result<(), InputError> {
        self.attacker.validate()?;
        self.target.validate()?;
        if let Some(weapon) = &self.weapon {
            weapon.validate()?;
        }
        self.environment.validate()
    }

    /// Runs the to-hit pipeline for this scenario.
    pub fn evaluate(&self) -> ToHitBreakdown {
        evaluate(
            &self.attacker,
            &self.target,
            self.weapon.as_ref(),
            &self.environment,
        )
    }

    /// Name to display, falling back to `fallback` for unnamed scenarios.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}
