//! Round engine driving a boss fight to completion.
//!
//! A `Battle` owns the boss, the ordered roster and the random source for
//! the whole fight. Each round runs the same fixed pipeline:
//! - defence selection
//! - the boss's sweep over the living heroes
//! - every eligible hero, in roster order: basic attack, then ability
//! - a statistics report
//!
//! Termination is evaluated at round boundaries only, so a single round can
//! leave both sides at zero; the heroes' win is checked first.

use combat::{
    BattleEvent, BattleLog, BattleRng, Boss, Combatant, Defender, EntityStatus, Outcome,
    SeededRng,
};
use error::BattleError;
use hero::Hero;

use crate::config::{BattleConfig, DefencePolicy};

/// Lifecycle of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// Built, nothing reported yet
    NotStarted,
    /// Rounds are being played
    InProgress,
    /// Boss health reached zero
    HeroesWin,
    /// Every hero's health reached zero
    BossWin,
}

impl BattlePhase {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            BattlePhase::HeroesWin => Some(Outcome::HeroesWin),
            BattlePhase::BossWin => Some(Outcome::BossWin),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }
}

impl From<Outcome> for BattlePhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::HeroesWin => BattlePhase::HeroesWin,
            Outcome::BossWin => BattlePhase::BossWin,
        }
    }
}

pub struct Battle {
    boss: Boss,
    heroes: Vec<Hero>,
    rng: Box<dyn BattleRng>,
    config: BattleConfig,
    round: u32,
    phase: BattlePhase,
    log: BattleLog,
}

impl Battle {
    /// Build a battle with a seeded random source.
    ///
    /// Without a configured seed a random one is drawn.
    pub fn new(boss: Boss, heroes: Vec<Hero>, config: BattleConfig) -> Result<Self, BattleError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "seeding battle rng");
        Self::with_rng(boss, heroes, config, Box::new(SeededRng::new(seed)))
    }

    /// Build a battle around an explicit random source
    pub fn with_rng(
        boss: Boss,
        heroes: Vec<Hero>,
        config: BattleConfig,
        rng: Box<dyn BattleRng>,
    ) -> Result<Self, BattleError> {
        if heroes.is_empty() {
            return Err(BattleError::EmptyRoster);
        }
        Ok(Self {
            boss,
            heroes,
            rng,
            config,
            round: 0,
            phase: BattlePhase::NotStarted,
            log: BattleLog::new(),
        })
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Number of rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Hand the accumulated events to the caller
    pub fn take_log(&mut self) -> Vec<BattleEvent> {
        self.log.drain()
    }

    /// Emit the opening report. Does nothing once started.
    pub fn start(&mut self) {
        if self.phase != BattlePhase::NotStarted {
            return;
        }
        tracing::info!(
            boss = self.boss.name(),
            heroes = self.heroes.len(),
            "battle started"
        );
        self.phase = BattlePhase::InProgress;
        self.report();
    }

    /// Terminal check, heroes first
    pub fn evaluate(&self) -> Option<Outcome> {
        if self.boss.health() <= 0 {
            return Some(Outcome::HeroesWin);
        }
        if self.heroes.iter().all(|hero| hero.health() <= 0) {
            return Some(Outcome::BossWin);
        }
        None
    }

    /// Play one round.
    ///
    /// Returns the outcome once the battle is decided at a round boundary. A
    /// battle that is already decided before the round does not play it.
    pub fn play_round(&mut self) -> Result<Option<Outcome>, BattleError> {
        if self.phase.is_terminal() {
            return Err(BattleError::BattleOver);
        }
        self.start();
        if let Some(outcome) = self.conclude() {
            return Ok(Some(outcome));
        }
        self.resolve_round()?;
        Ok(self.conclude())
    }

    /// Play rounds until one side wins or the round cap is hit
    pub fn run(&mut self) -> Result<Outcome, BattleError> {
        self.start();
        loop {
            if let Some(outcome) = self.conclude() {
                return Ok(outcome);
            }
            if self.round >= self.config.max_rounds {
                tracing::warn!(limit = self.config.max_rounds, "round limit reached");
                return Err(BattleError::RoundLimitReached {
                    limit: self.config.max_rounds,
                });
            }
            self.resolve_round()?;
        }
    }

    fn resolve_round(&mut self) -> Result<(), BattleError> {
        self.round += 1;
        self.log.push(BattleEvent::RoundStarted { round: self.round });

        let ability = match self.config.defence {
            DefencePolicy::MirrorRandomHero => {
                self.boss.choose_defence(&self.heroes, self.rng.as_mut())?
            }
            DefencePolicy::Fixed(ability) => {
                self.boss.set_defence(ability);
                ability
            }
        };
        self.log.push(BattleEvent::DefenceChosen { ability });

        self.boss
            .attack(&mut self.heroes, self.rng.as_mut(), &mut self.log);

        for index in 0..self.heroes.len() {
            if !self.heroes[index].is_alive() || !self.boss.is_alive() {
                continue;
            }
            let ability = self.heroes[index].ability();
            if self.boss.resists(ability) {
                self.log.push(BattleEvent::HeroResisted {
                    hero: self.heroes[index].name().to_string(),
                    ability,
                });
                continue;
            }
            hero::attack(&mut self.heroes, index, &mut self.boss, &mut self.log)?;
            hero::apply_ability(
                &mut self.heroes,
                index,
                &mut self.boss,
                self.rng.as_mut(),
                &mut self.log,
            )?;
        }

        self.report();
        Ok(())
    }

    /// Latch a decided outcome into the phase, logging it once
    fn conclude(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.phase.outcome() {
            return Some(outcome);
        }
        let outcome = self.evaluate()?;
        self.phase = outcome.into();
        tracing::info!(?outcome, rounds = self.round, "battle finished");
        self.log.push(BattleEvent::BattleEnded {
            outcome,
            rounds: self.round,
        });
        Some(outcome)
    }

    fn report(&mut self) {
        self.log.push(BattleEvent::RoundReport {
            round: self.round,
            boss: EntityStatus::of(&self.boss),
            defence: self.boss.defence(),
            heroes: self.heroes.iter().map(EntityStatus::of).collect(),
        });
    }
}
