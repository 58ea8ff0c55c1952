//! Test helpers for building deterministic battles.

#![allow(dead_code)]

use boss_raid::{AbilityKind, Battle, BattleConfig, Boss, DefencePolicy, Hero};
use combat::ScriptedRng;

/// Builder for battles driven by a scripted random sequence
pub struct TestBattleBuilder {
    boss: Boss,
    heroes: Vec<Hero>,
    config: BattleConfig,
    script: Vec<i64>,
}

impl TestBattleBuilder {
    pub fn new(boss_health: i64, boss_damage: i64) -> Self {
        Self {
            boss: Boss::new("Tanos", boss_health, boss_damage).unwrap(),
            heroes: Vec::new(),
            config: BattleConfig::default(),
            script: vec![1],
        }
    }

    pub fn with_hero(mut self, hero: Hero) -> Self {
        self.heroes.push(hero);
        self
    }

    /// Boss always resists `ability`
    pub fn resisting(mut self, ability: AbilityKind) -> Self {
        self.config = self.config.with_defence(DefencePolicy::Fixed(ability));
        self
    }

    pub fn with_script(mut self, script: Vec<i64>) -> Self {
        self.script = script;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.config = self.config.with_max_rounds(max_rounds);
        self
    }

    pub fn build(self) -> Battle {
        Battle::with_rng(
            self.boss,
            self.heroes,
            self.config,
            Box::new(ScriptedRng::new(self.script)),
        )
        .unwrap()
    }
}
