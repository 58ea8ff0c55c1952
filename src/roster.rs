//! The standard raid: one boss against a party of twelve.

use combat::Boss;
use error::BattleError;
use hero::Hero;

pub fn standard_boss() -> Result<Boss, BattleError> {
    Boss::new("Tanos", 1000, 50)
}

/// The party in fighting order
pub fn standard_party() -> Result<Vec<Hero>, BattleError> {
    Ok(vec![
        Hero::warrior("Ahiles", 280, 5)?,
        Hero::warrior("Sponge Bob", 270, 10)?,
        Hero::magic("Ainz", 100, 10, 5)?,
        Hero::berserk("Gatz", 220, 20)?,
        Hero::medic("Haus", 250, 5, 15)?,
        Hero::medic("Zolo", 290, 5, 5)?,
        Hero::magic("Hendolf", 180, 20, 5)?,
        Hero::witcher("Gran", 100, 0)?,
        Hero::hacker("NOname052", 270, 0)?,
        Hero::spitfire("Kaze", 100, 15)?,
        Hero::ludoman("Joker", 100, 0)?,
        Hero::deku("Izuku", 100, 20)?,
    ])
}
