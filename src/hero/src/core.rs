// src/hero/src/core.rs
use std::fmt;

use combat::{AbilityKind, Combatant, Defender, Vitals};
use error::BattleError;
use serde::Serialize;

use crate::class::Class;

/// A party member
#[derive(Clone, Debug, Serialize)]
pub struct Hero {
    vitals: Vitals,
    class: Class,
}

impl Hero {
    /// Create a hero; the archetype is fixed for its whole life
    pub fn new(
        name: impl Into<String>,
        health: i64,
        damage: i64,
        class: Class,
    ) -> Result<Self, BattleError> {
        Ok(Self {
            vitals: Vitals::new(name, health, damage)?,
            class,
        })
    }

    pub fn warrior(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::Warrior)
    }

    pub fn magic(
        name: impl Into<String>,
        health: i64,
        damage: i64,
        boost_amount: i64,
    ) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::magic(boost_amount))
    }

    pub fn berserk(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::berserk())
    }

    pub fn medic(
        name: impl Into<String>,
        health: i64,
        damage: i64,
        heal_points: i64,
    ) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::medic(heal_points))
    }

    pub fn witcher(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::Witcher)
    }

    pub fn ludoman(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::Ludoman)
    }

    pub fn hacker(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::Hacker)
    }

    pub fn spitfire(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::spitfire())
    }

    pub fn deku(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Self::new(name, health, damage, Class::Deku)
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Damage absorbed by the latest mitigation event (Berserk only)
    pub fn blocked_damage(&self) -> Option<i64> {
        match self.class {
            Class::Berserk { blocked_damage } => Some(blocked_damage),
            _ => None,
        }
    }

    /// Accumulated rage (Spitfire only)
    pub fn aggression(&self) -> Option<f64> {
        match self.class {
            Class::Spitfire { aggression, .. } => Some(aggression),
            _ => None,
        }
    }

    /// Grow rage once per living ally and return the new total.
    /// No-op for other archetypes.
    pub(crate) fn build_aggression(&mut self, allies: usize) -> f64 {
        match &mut self.class {
            Class::Spitfire { aggression, .. } => {
                for _ in 0..allies {
                    *aggression += crate::class::AGGRESSION_PER_ALLY;
                }
                *aggression
            }
            _ => 0.0,
        }
    }
}

impl Combatant for Hero {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl Defender for Hero {
    fn ability(&self) -> AbilityKind {
        self.class.ability()
    }

    fn record_blocked(&mut self, amount: i64) {
        if let Class::Berserk { blocked_damage } = &mut self.class {
            *blocked_damage = amount;
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} health: {} damage: {}",
            self.name(),
            self.health(),
            self.damage()
        )
    }
}
