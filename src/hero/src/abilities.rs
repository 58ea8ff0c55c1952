//! Per-archetype attack and special ability resolution.
//!
//! Both entry points take the whole roster plus the index of the acting hero,
//! since several archetypes read or mutate their allies.

use combat::{
    AbilityKind, BattleEvent, BattleLog, BattleRng, Boss, Combat, Combatant, Defender,
};
use error::BattleError;

use crate::class::Class;
use crate::core::Hero;

/// Inclusive range of the Warrior's crit multiplier
pub const CRIT_MULTIPLIER: (i64, i64) = (2, 5);

/// Inclusive range of each Ludoman die
pub const DICE_FACES: (i64, i64) = (1, 9);

/// Deku power tiers: (damage gained, health lost) as fractions of current values
pub const POWER_TIERS: [(f64, f64); 3] = [(0.2, 0.2), (0.5, 0.5), (1.0, 0.9)];

fn check_index(roster: &[Hero], index: usize) -> Result<(), BattleError> {
    if roster.is_empty() {
        return Err(BattleError::EmptyRoster);
    }
    if index >= roster.len() {
        return Err(BattleError::HeroIndexOutOfRange {
            index,
            len: roster.len(),
        });
    }
    Ok(())
}

/// Basic attack step of `roster[index]`.
///
/// Every archetype strikes the boss for its damage, except the Spitfire whose
/// rage replaces the strike.
pub fn attack(
    roster: &mut [Hero],
    index: usize,
    boss: &mut Boss,
    log: &mut BattleLog,
) -> Result<(), BattleError> {
    check_index(roster, index)?;

    if matches!(roster[index].class(), Class::Spitfire { .. }) {
        pioneer_rage(roster, index, boss, log);
    } else {
        Combat::strike(&roster[index], boss, log);
    }
    Ok(())
}

/// Special ability step of `roster[index]`.
pub fn apply_ability(
    roster: &mut [Hero],
    index: usize,
    boss: &mut Boss,
    rng: &mut dyn BattleRng,
    log: &mut BattleLog,
) -> Result<(), BattleError> {
    check_index(roster, index)?;

    match roster[index].class().clone() {
        Class::Warrior => critical_damage(&roster[index], boss, rng, log),
        Class::Magic { boost_amount } => boost(roster, index, boost_amount, log),
        Class::Berserk { blocked_damage } => revert(&roster[index], blocked_damage, boss, log),
        Class::Medic { heal_points } => heal(roster, index, heal_points, log),
        Class::Witcher => self_sacrifice(roster, index, log),
        Class::Ludoman => dicey_shot(roster, index, boss, rng, log),
        Class::Deku => one_for_all(&mut roster[index], rng, log),
        // The Hacker has nothing to do; the Spitfire acts in its attack step.
        Class::Hacker | Class::Spitfire { .. } => {}
    }
    Ok(())
}

fn critical_damage(hero: &Hero, boss: &mut Boss, rng: &mut dyn BattleRng, log: &mut BattleLog) {
    let (low, high) = CRIT_MULTIPLIER;
    let multiplier = rng.roll(low, high);
    let damage = hero.damage() * multiplier;
    boss.take_damage(damage);
    log.push(BattleEvent::CriticalHit {
        hero: hero.name().to_string(),
        multiplier,
        damage,
    });
}

// Dead heroes and the caster itself are boosted too.
fn boost(roster: &mut [Hero], index: usize, amount: i64, log: &mut BattleLog) {
    for hero in roster.iter_mut() {
        let damage = hero.damage();
        hero.set_damage(damage + amount);
    }
    log.push(BattleEvent::Boosted {
        hero: roster[index].name().to_string(),
        amount,
    });
}

fn revert(hero: &Hero, blocked: i64, boss: &mut Boss, log: &mut BattleLog) {
    boss.take_damage(blocked);
    log.push(BattleEvent::Reverted {
        hero: hero.name().to_string(),
        damage: blocked,
    });
}

fn heal(roster: &mut [Hero], index: usize, heal_points: i64, log: &mut BattleLog) {
    let medic = roster[index].name().to_string();
    for (i, hero) in roster.iter_mut().enumerate() {
        if i == index || !hero.is_alive() {
            continue;
        }
        hero.heal(heal_points);
        log.push(BattleEvent::Healed {
            medic: medic.clone(),
            target: hero.name().to_string(),
            amount: heal_points,
        });
    }
}

fn self_sacrifice(roster: &mut [Hero], index: usize, log: &mut BattleLog) {
    // A spent Witcher has nothing left to give.
    if !roster[index].is_alive() {
        return;
    }

    let target = roster
        .iter()
        .position(|hero| hero.health() == 0 && hero.ability() != AbilityKind::SelfSacrifice);

    let Some(target) = target else {
        tracing::trace!("{} found nobody to revive", roster[index].name());
        return;
    };

    let gift = roster[index].health();
    roster[target].heal(gift);
    roster[index].set_health(0);
    log.push(BattleEvent::Revived {
        witcher: roster[index].name().to_string(),
        target: roster[target].name().to_string(),
        health: roster[target].health(),
    });
}

fn dicey_shot(
    roster: &mut [Hero],
    index: usize,
    boss: &mut Boss,
    rng: &mut dyn BattleRng,
    log: &mut BattleLog,
) {
    let (low, high) = DICE_FACES;
    let first = rng.roll(low, high);
    let second = rng.roll(low, high);
    let gambler = roster[index].name().to_string();

    if first == second {
        let damage = first * second * 2;
        boss.take_damage(damage);
        log.push(BattleEvent::Jackpot {
            hero: gambler,
            roll: first,
            damage,
        });
    } else {
        // Any hero can be hit, the gambler and the fallen included.
        let target = rng.pick_index(roster.len());
        let damage = first + second;
        roster[target].take_damage(damage);
        log.push(BattleEvent::FriendlyFire {
            hero: gambler,
            target: roster[target].name().to_string(),
            damage,
        });
    }
}

fn pioneer_rage(roster: &mut [Hero], index: usize, boss: &mut Boss, log: &mut BattleLog) {
    let allies = roster.iter().filter(|hero| hero.is_alive()).count();
    let aggression = roster[index].build_aggression(allies);

    // Feeds the boss, not the party. Kept as observed.
    // Boss damage is an integer: the running aggression is rounded half to even on each rage.
    let boss_damage = boss.damage() + aggression.round_ties_even() as i64;
    boss.set_damage(boss_damage);

    log.push(BattleEvent::RageUnleashed {
        hero: roster[index].name().to_string(),
        aggression,
        boss_damage,
    });
}

fn one_for_all(hero: &mut Hero, rng: &mut dyn BattleRng, log: &mut BattleLog) {
    // Heads: nothing happens.
    if rng.roll(1, 2) == 1 {
        return;
    }

    let tier = rng.roll(1, POWER_TIERS.len() as i64) as usize;
    let (damage_pct, health_pct) = POWER_TIERS[tier - 1];
    let damage_gain = (hero.damage() as f64 * damage_pct).round_ties_even() as i64;
    let health_loss = (hero.health() as f64 * health_pct).round_ties_even() as i64;

    let damage = hero.damage();
    hero.set_damage(damage + damage_gain);
    hero.take_damage(health_loss);

    log.push(BattleEvent::PowerSurge {
        hero: hero.name().to_string(),
        tier: tier as u8,
        damage_gain,
        health_loss,
    });
}
