//! Battle event log
//!
//! The engine never prints. Every observable step is appended to a
//! [`BattleLog`] as a structured [`BattleEvent`]; rendering to text happens
//! elsewhere and only reads the log.

use serde::Serialize;

use crate::ability::AbilityKind;
use crate::combatant::Combatant;

/// Which side won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    HeroesWin,
    BossWin,
}

/// Snapshot of one combatant for the per-round report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityStatus {
    pub name: String,
    pub health: i64,
    pub damage: i64,
}

impl EntityStatus {
    pub fn of<C: Combatant + ?Sized>(combatant: &C) -> Self {
        Self {
            name: combatant.name().to_string(),
            health: combatant.health(),
            damage: combatant.damage(),
        }
    }
}

/// Everything that can happen during a battle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BattleEvent {
    // ===== Round flow =====
    /// A new round begins
    RoundStarted { round: u32 },
    /// The boss picked what to resist this round
    DefenceChosen { ability: AbilityKind },
    /// A hero matched the boss's defence and sits the round out
    HeroResisted { hero: String, ability: AbilityKind },
    /// Per-round statistics
    RoundReport {
        round: u32,
        boss: EntityStatus,
        defence: Option<AbilityKind>,
        heroes: Vec<EntityStatus>,
    },
    /// The battle reached a terminal state
    BattleEnded { outcome: Outcome, rounds: u32 },

    // ===== Attacks =====
    /// Boss hit a hero; `blocked` is the mitigated part
    BossStruck {
        hero: String,
        damage: i64,
        blocked: i64,
    },
    /// Hero hit the boss with a basic attack
    HeroStruck { hero: String, damage: i64 },

    // ===== Abilities =====
    CriticalHit {
        hero: String,
        multiplier: i64,
        damage: i64,
    },
    Boosted { hero: String, amount: i64 },
    Reverted { hero: String, damage: i64 },
    Healed {
        medic: String,
        target: String,
        amount: i64,
    },
    Revived {
        witcher: String,
        target: String,
        health: i64,
    },
    Jackpot {
        hero: String,
        roll: i64,
        damage: i64,
    },
    FriendlyFire {
        hero: String,
        target: String,
        damage: i64,
    },
    RageUnleashed {
        hero: String,
        aggression: f64,
        boss_damage: i64,
    },
    PowerSurge {
        hero: String,
        tier: u8,
        damage_gain: i64,
        health_loss: i64,
    },
}

impl BattleEvent {
    /// Event type name, mostly for diagnostics
    pub fn event_type(&self) -> &'static str {
        match self {
            BattleEvent::RoundStarted { .. } => "RoundStarted",
            BattleEvent::DefenceChosen { .. } => "DefenceChosen",
            BattleEvent::HeroResisted { .. } => "HeroResisted",
            BattleEvent::RoundReport { .. } => "RoundReport",
            BattleEvent::BattleEnded { .. } => "BattleEnded",
            BattleEvent::BossStruck { .. } => "BossStruck",
            BattleEvent::HeroStruck { .. } => "HeroStruck",
            BattleEvent::CriticalHit { .. } => "CriticalHit",
            BattleEvent::Boosted { .. } => "Boosted",
            BattleEvent::Reverted { .. } => "Reverted",
            BattleEvent::Healed { .. } => "Healed",
            BattleEvent::Revived { .. } => "Revived",
            BattleEvent::Jackpot { .. } => "Jackpot",
            BattleEvent::FriendlyFire { .. } => "FriendlyFire",
            BattleEvent::RageUnleashed { .. } => "RageUnleashed",
            BattleEvent::PowerSurge { .. } => "PowerSurge",
        }
    }

    /// Name of the hero that performed the action, if any
    pub fn actor(&self) -> Option<&str> {
        match self {
            BattleEvent::HeroResisted { hero, .. }
            | BattleEvent::HeroStruck { hero, .. }
            | BattleEvent::CriticalHit { hero, .. }
            | BattleEvent::Boosted { hero, .. }
            | BattleEvent::Reverted { hero, .. }
            | BattleEvent::Jackpot { hero, .. }
            | BattleEvent::FriendlyFire { hero, .. }
            | BattleEvent::RageUnleashed { hero, .. }
            | BattleEvent::PowerSurge { hero, .. } => Some(hero.as_str()),
            BattleEvent::Healed { medic, .. } => Some(medic.as_str()),
            BattleEvent::Revived { witcher, .. } => Some(witcher.as_str()),
            _ => None,
        }
    }
}

/// Ordered, append-only record of a battle
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    events: Vec<BattleEvent>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BattleEvent) {
        tracing::debug!(event = event.event_type(), "{:?}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events performed by the named hero
    pub fn by_actor<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a BattleEvent> + 'a {
        self.events
            .iter()
            .filter(move |event| event.actor() == Some(name))
    }

    /// Take all events, leaving the log empty
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<'a> IntoIterator for &'a BattleLog {
    type Item = &'a BattleEvent;
    type IntoIter = std::slice::Iter<'a, BattleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
