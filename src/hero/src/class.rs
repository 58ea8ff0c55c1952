// src/hero/src/class.rs

use combat::AbilityKind;
use serde::Serialize;
use strum_macros::IntoStaticStr;

/// Aggression a Spitfire gains per living ally when it attacks
pub const AGGRESSION_PER_ALLY: f64 = 0.8;

/// Spitfire attack power when none is given. Carried as roster data, no rule reads it.
pub const SPITFIRE_ATTACK_POWER: i64 = 10;

/// Hero archetypes and the state each one carries
#[derive(Clone, Debug, PartialEq, Serialize, IntoStaticStr)]
pub enum Class {
    /// Critical hits on the boss
    Warrior,
    /// Permanently raises the damage of the whole party
    Magic { boost_amount: i64 },
    /// Absorbs part of the boss's hits and throws it back
    Berserk { blocked_damage: i64 },
    /// Heals every other living hero
    Medic { heal_points: i64 },
    /// Gives its own life to a fallen ally
    Witcher,
    /// Gambles on two dice
    Ludoman,
    /// No usable special effect
    Hacker,
    /// Replaces its attack with a rage that feeds the boss.
    /// `attack_power` is descriptive only, the rage uses `aggression`.
    Spitfire { attack_power: i64, aggression: f64 },
    /// Trades health for damage
    Deku,
}

impl Class {
    pub fn magic(boost_amount: i64) -> Self {
        Class::Magic { boost_amount }
    }

    pub fn berserk() -> Self {
        Class::Berserk { blocked_damage: 0 }
    }

    pub fn medic(heal_points: i64) -> Self {
        Class::Medic { heal_points }
    }

    pub fn spitfire() -> Self {
        Class::Spitfire {
            attack_power: SPITFIRE_ATTACK_POWER,
            aggression: 0.0,
        }
    }

    /// Ability kind that identifies the archetype
    pub fn ability(&self) -> AbilityKind {
        match self {
            Class::Warrior => AbilityKind::CriticalDamage,
            Class::Magic { .. } => AbilityKind::Boost,
            Class::Berserk { .. } => AbilityKind::BlockDamageRevert,
            Class::Medic { .. } => AbilityKind::Heal,
            Class::Witcher => AbilityKind::SelfSacrifice,
            Class::Ludoman => AbilityKind::DiceyShot,
            Class::Hacker => AbilityKind::Drake,
            Class::Spitfire { .. } => AbilityKind::PioneerRage,
            Class::Deku => AbilityKind::OneForAll,
        }
    }

    /// Archetype name, e.g. "Warrior"
    pub fn archetype(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.archetype())
    }
}
