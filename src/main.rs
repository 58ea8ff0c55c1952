use std::time::SystemTime;

use anyhow::{Context, Result};
use boss_raid::{Battle, BattleConfig, BattleError, render, roster};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let seed = {
        let time = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)?
            .as_nanos();
        (time ^ (std::process::id() as u128)) as u64
    };

    let boss = roster::standard_boss().context("Failed to build the boss")?;
    let party = roster::standard_party().context("Failed to build the party")?;
    let mut battle = Battle::new(boss, party, BattleConfig::default().with_seed(seed))?;

    let result = battle.run();
    let events = battle.take_log();
    println!("{}", render::render_log(&events));

    match result {
        Ok(_) => Ok(()),
        Err(BattleError::RoundLimitReached { limit }) => {
            println!("No winner after {limit} rounds");
            Ok(())
        }
        Err(e) => Err(e).context("Battle aborted"),
    }
}
