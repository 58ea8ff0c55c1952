// src/combat/src/lib.rs

pub mod ability;
pub mod boss;
pub mod combatant;
pub mod entity;
pub mod event;
pub mod rng;


pub use crate::ability::AbilityKind;
pub use crate::boss::Boss;
pub use crate::combatant::{Combatant, Defender};
pub use crate::entity::Vitals;
pub use crate::event::{BattleEvent, BattleLog, EntityStatus, Outcome};
pub use crate::rng::{BattleRng, ScriptedRng, SeededRng};

/// Handles the plain damage exchanges of a round
pub struct Combat;

/// Combat constants
pub mod constants {
    /// Divisor base of the mitigation formula, scaled by the coefficient
    pub const BLOCK_DIVISOR: i64 = 5;
    /// Inclusive range of the mitigation coefficient
    pub const BLOCK_COEFFICIENT: (i64, i64) = (1, 2);
}

impl Combat {
    /// Portion of a boss hit absorbed by a mitigating hero:
    /// `floor(damage / (coefficient * 5))`
    pub fn blocked_damage(boss_damage: i64, coefficient: i64) -> i64 {
        boss_damage.div_euclid(coefficient * constants::BLOCK_DIVISOR)
    }

    /// Basic attack: the defender loses the attacker's full damage
    pub fn strike<A, D>(attacker: &A, defender: &mut D, log: &mut BattleLog) -> i64
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        let damage = attacker.damage();
        defender.take_damage(damage);
        log.push(BattleEvent::HeroStruck {
            hero: attacker.name().to_string(),
            damage,
        });
        damage
    }
}
