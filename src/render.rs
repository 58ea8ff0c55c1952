//! Text rendering of the battle log.
//!
//! Pure formatting: reads events, never touches battle state.

use std::fmt::Write;

use combat::{BattleEvent, EntityStatus, Outcome};

fn status_line(status: &EntityStatus) -> String {
    format!(
        "{} health: {} damage: {}",
        status.name, status.health, status.damage
    )
}

/// Text for one event, `None` for events that stay out of the report
pub fn render_event(event: &BattleEvent) -> Option<String> {
    let text = match event {
        BattleEvent::RoundReport {
            round,
            boss,
            defence,
            heroes,
        } => {
            let defence = defence.map_or_else(|| "None".to_string(), |kind| kind.to_string());
            let mut text = format!(
                "ROUND: {round} ----------\nBOSS {} defence: {defence}",
                status_line(boss)
            );
            for hero in heroes {
                let _ = write!(text, "\n{}", status_line(hero));
            }
            text
        }
        BattleEvent::BattleEnded { outcome, .. } => match outcome {
            Outcome::HeroesWin => "Heroes won!!!".to_string(),
            Outcome::BossWin => "Boss won!!!".to_string(),
        },
        BattleEvent::CriticalHit { hero, damage, .. } => {
            format!("Warrior {hero} hit critically {damage}")
        }
        BattleEvent::Boosted { hero, amount } => {
            format!("{hero} boosted the party's damage by {amount}")
        }
        BattleEvent::Reverted { hero, damage } => format!("Berserk {hero} reverted {damage}"),
        BattleEvent::Healed {
            medic,
            target,
            amount,
        } => format!("{medic} healed {target} for {amount}"),
        BattleEvent::Revived {
            witcher, target, ..
        } => format!("🦠{witcher} revived {target}"),
        BattleEvent::Jackpot { hero, damage, .. } => {
            format!("{hero} hit the jackpot for {damage} damage")
        }
        BattleEvent::FriendlyFire {
            hero,
            target,
            damage,
        } => format!("{hero} damaged teammate {target} on {damage}"),
        BattleEvent::RageUnleashed {
            hero, boss_damage, ..
        } => format!("{hero} raged, boss damage is now {boss_damage}"),
        BattleEvent::PowerSurge {
            hero,
            damage_gain,
            health_loss,
            ..
        } => format!("🧨{hero} power up +{damage_gain}\n☸️{hero} hp -{health_loss}"),
        BattleEvent::RoundStarted { .. }
        | BattleEvent::DefenceChosen { .. }
        | BattleEvent::HeroResisted { .. }
        | BattleEvent::BossStruck { .. }
        | BattleEvent::HeroStruck { .. } => return None,
    };
    Some(text)
}

/// Render a sequence of events, one block per line
pub fn render_log<'a>(events: impl IntoIterator<Item = &'a BattleEvent>) -> String {
    events
        .into_iter()
        .filter_map(render_event)
        .collect::<Vec<_>>()
        .join("\n")
}
