// src/combat/src/entity.rs

use error::BattleError;
use serde::Serialize;

/// Shared mutable state of every combatant
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vitals {
    name: String,
    health: i64,
    damage: i64,
}

impl Vitals {
    /// Validates initial values; the runtime clamp does not apply here.
    pub fn new(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BattleError::EmptyName);
        }
        if health < 0 {
            return Err(BattleError::NegativeHealth { name, health });
        }
        Ok(Self {
            name,
            health,
            damage,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    /// Negative values clamp to zero
    pub fn set_health(&mut self, value: i64) {
        self.health = value.max(0);
    }

    pub fn damage(&self) -> i64 {
        self.damage
    }

    pub fn set_damage(&mut self, value: i64) {
        self.damage = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_write_clamps() {
        let mut vitals = Vitals::new("Tanos", 10, 50).unwrap();
        vitals.set_health(-30);
        assert_eq!(vitals.health(), 0);
        vitals.set_health(7);
        assert_eq!(vitals.health(), 7);
    }

    #[test]
    fn test_damage_is_not_clamped() {
        let mut vitals = Vitals::new("Joker", 100, 0).unwrap();
        vitals.set_damage(-4);
        assert_eq!(vitals.damage(), -4);
    }

    #[test]
    fn test_construction_rejects_bad_values() {
        assert_eq!(
            Vitals::new("Gran", -1, 0),
            Err(BattleError::NegativeHealth {
                name: "Gran".to_string(),
                health: -1
            })
        );
        assert_eq!(Vitals::new("  ", 10, 0), Err(BattleError::EmptyName));
        assert!(Vitals::new("Gran", 0, 0).is_ok());
    }
}
