// src/combat/src/boss.rs

use error::BattleError;

use crate::ability::AbilityKind;
use crate::combatant::{Combatant, Defender};
use crate::entity::Vitals;
use crate::event::{BattleEvent, BattleLog};
use crate::rng::BattleRng;
use crate::{Combat, constants};

/// The single adversary of the battle
#[derive(Clone, Debug)]
pub struct Boss {
    vitals: Vitals,
    defence: Option<AbilityKind>,
}

impl Boss {
    pub fn new(name: impl Into<String>, health: i64, damage: i64) -> Result<Self, BattleError> {
        Ok(Self {
            vitals: Vitals::new(name, health, damage)?,
            defence: None,
        })
    }

    /// Ability kind resisted this round, `None` before the first round
    pub fn defence(&self) -> Option<AbilityKind> {
        self.defence
    }

    /// Force a defence, bypassing the random pick
    pub fn set_defence(&mut self, ability: AbilityKind) {
        self.defence = Some(ability);
    }

    /// Whether heroes of this kind are resisted this round
    pub fn resists(&self, ability: AbilityKind) -> bool {
        self.defence == Some(ability)
    }

    /// Mirror the ability of a uniformly random hero, dead or alive.
    pub fn choose_defence<T: Defender>(
        &mut self,
        heroes: &[T],
        rng: &mut dyn BattleRng,
    ) -> Result<AbilityKind, BattleError> {
        if heroes.is_empty() {
            return Err(BattleError::EmptyRoster);
        }
        let ability = heroes[rng.pick_index(heroes.len())].ability();
        self.defence = Some(ability);
        Ok(ability)
    }

    /// Hit every living hero once.
    ///
    /// Mitigating heroes absorb part of the blow unless their kind is the
    /// current defence. Returns the total health taken from the party.
    pub fn attack<T: Defender>(
        &self,
        heroes: &mut [T],
        rng: &mut dyn BattleRng,
        log: &mut BattleLog,
    ) -> i64 {
        let mut total = 0;
        for hero in heroes.iter_mut().filter(|hero| hero.is_alive()) {
            let blocked = if hero.ability().mitigates() && !self.resists(hero.ability()) {
                let (low, high) = constants::BLOCK_COEFFICIENT;
                let coefficient = rng.roll(low, high);
                let blocked = Combat::blocked_damage(self.damage(), coefficient);
                hero.record_blocked(blocked);
                blocked
            } else {
                0
            };

            let damage = self.damage() - blocked;
            let before = hero.health();
            hero.take_damage(damage);
            total += before - hero.health();

            log.push(BattleEvent::BossStruck {
                hero: hero.name().to_string(),
                damage,
                blocked,
            });
        }
        total
    }
}

impl Combatant for Boss {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use pretty_assertions::assert_eq;

    /// Minimal defender for exercising the boss in isolation
    struct Dummy {
        vitals: Vitals,
        ability: AbilityKind,
        blocked: i64,
    }

    impl Dummy {
        fn new(name: &str, health: i64, ability: AbilityKind) -> Self {
            Self {
                vitals: Vitals::new(name, health, 10).unwrap(),
                ability,
                blocked: 0,
            }
        }
    }

    impl Combatant for Dummy {
        fn vitals(&self) -> &Vitals {
            &self.vitals
        }
        fn vitals_mut(&mut self) -> &mut Vitals {
            &mut self.vitals
        }
    }

    impl Defender for Dummy {
        fn ability(&self) -> AbilityKind {
            self.ability
        }
        fn record_blocked(&mut self, amount: i64) {
            self.blocked = amount;
        }
    }

    #[test]
    fn test_choose_defence_mirrors_picked_hero() {
        let mut boss = Boss::new("Tanos", 1000, 50).unwrap();
        let heroes = vec![
            Dummy::new("A", 10, AbilityKind::Heal),
            Dummy::new("B", 0, AbilityKind::Boost),
            Dummy::new("C", 10, AbilityKind::DiceyShot),
        ];
        // Dead heroes are still eligible.
        let mut rng = ScriptedRng::new(vec![1, 2]);
        assert_eq!(boss.choose_defence(&heroes, &mut rng), Ok(AbilityKind::Boost));
        assert_eq!(boss.defence(), Some(AbilityKind::Boost));
        assert_eq!(boss.choose_defence(&heroes, &mut rng), Ok(AbilityKind::DiceyShot));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_choose_defence_rejects_empty_roster() {
        let mut boss = Boss::new("Tanos", 1000, 50).unwrap();
        let heroes: Vec<Dummy> = Vec::new();
        let mut rng = ScriptedRng::new(vec![0]);
        assert_eq!(
            boss.choose_defence(&heroes, &mut rng),
            Err(BattleError::EmptyRoster)
        );
        assert_eq!(boss.defence(), None);
    }

    #[test]
    fn test_attack_mitigates_blockers() {
        let mut boss = Boss::new("Tanos", 1000, 50).unwrap();
        boss.set_defence(AbilityKind::Heal);
        let mut heroes = vec![Dummy::new("Gatz", 220, AbilityKind::BlockDamageRevert)];
        let mut rng = ScriptedRng::new(vec![1]);
        let mut log = BattleLog::new();

        let taken = boss.attack(&mut heroes, &mut rng, &mut log);

        assert_eq!(taken, 40);
        assert_eq!(heroes[0].health(), 180);
        assert_eq!(heroes[0].blocked, 10);
        assert_eq!(
            log.events(),
            &[BattleEvent::BossStruck {
                hero: "Gatz".to_string(),
                damage: 40,
                blocked: 10
            }]
        );
    }

    #[test]
    fn test_attack_coefficient_two_halves_the_block() {
        let mut boss = Boss::new("Tanos", 1000, 50).unwrap();
        boss.set_defence(AbilityKind::Heal);
        let mut heroes = vec![Dummy::new("Gatz", 220, AbilityKind::BlockDamageRevert)];
        let mut rng = ScriptedRng::new(vec![2]);
        boss.attack(&mut heroes, &mut rng, &mut BattleLog::new());

        assert_eq!(heroes[0].blocked, 5);
        assert_eq!(heroes[0].health(), 175);
    }

    #[test]
    fn test_attack_full_damage_when_block_is_resisted() {
        let mut boss = Boss::new("Tanos", 1000, 50).unwrap();
        boss.set_defence(AbilityKind::BlockDamageRevert);
        let mut heroes = vec![Dummy::new("Gatz", 220, AbilityKind::BlockDamageRevert)];
        let mut rng = ScriptedRng::new(vec![1]);
        boss.attack(&mut heroes, &mut rng, &mut BattleLog::new());

        assert_eq!(heroes[0].health(), 170);
        assert_eq!(heroes[0].blocked, 0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_attack_skips_dead_and_clamps() {
        let boss = Boss::new("Tanos", 1000, 50).unwrap();
        let mut heroes = vec![
            Dummy::new("Dead", 0, AbilityKind::Heal),
            Dummy::new("Frail", 20, AbilityKind::Boost),
        ];
        let mut rng = ScriptedRng::new(vec![1]);
        let mut log = BattleLog::new();
        let taken = boss.attack(&mut heroes, &mut rng, &mut log);

        assert_eq!(taken, 20);
        assert_eq!(heroes[1].health(), 0);
        assert_eq!(log.len(), 1);
    }
}
