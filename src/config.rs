//! Battle configuration.
//!
//! Construction-time settings only; nothing here is read from the
//! environment or from disk.

use combat::AbilityKind;
use serde::{Deserialize, Serialize};

/// Default safety bound on the number of rounds
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

/// How the boss picks the ability kind it resists each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DefencePolicy {
    /// Copy the ability of a uniformly random hero, dead or alive
    #[default]
    MirrorRandomHero,
    /// Always resist the same kind without consulting the random source
    Fixed(AbilityKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Rounds played before the battle is declared undecided
    pub max_rounds: u32,
    /// Seed for the random source; `None` lets the caller pick one
    pub seed: Option<u64>,
    pub defence: DefencePolicy,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
            defence: DefencePolicy::default(),
        }
    }
}

impl BattleConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_defence(mut self, defence: DefencePolicy) -> Self {
        self.defence = defence;
        self
    }
}
