// src/combat/src/combatant.rs

use crate::ability::AbilityKind;
use crate::entity::Vitals;

/// A living participant of the battle
pub trait Combatant {
    /// Underlying stats
    fn vitals(&self) -> &Vitals;

    /// Mutable access to the underlying stats
    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        self.vitals().name()
    }

    fn health(&self) -> i64 {
        self.vitals().health()
    }

    fn set_health(&mut self, value: i64) {
        self.vitals_mut().set_health(value);
    }

    fn damage(&self) -> i64 {
        self.vitals().damage()
    }

    fn set_damage(&mut self, value: i64) {
        self.vitals_mut().set_damage(value);
    }

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Lose health, clamped at zero
    fn take_damage(&mut self, amount: i64) {
        let health = self.health();
        self.set_health(health - amount);
    }

    /// Gain health; there is no maximum
    fn heal(&mut self, amount: i64) {
        let health = self.health();
        self.set_health(health + amount);
    }
}

/// A combatant the boss can strike during its sweep
pub trait Defender: Combatant {
    /// The ability kind that identifies this combatant's archetype
    fn ability(&self) -> AbilityKind;

    /// Store the amount absorbed by the latest mitigation event.
    /// Only mitigating archetypes keep it.
    fn record_blocked(&mut self, _amount: i64) {}
}
