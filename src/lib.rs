pub mod battle;
pub mod config;
pub mod render;
pub mod roster;

pub use battle::{Battle, BattlePhase};
pub use config::{BattleConfig, DefencePolicy};

pub use combat::{AbilityKind, BattleEvent, BattleLog, Boss, Outcome};
pub use error::BattleError;
pub use hero::{Class, Hero};
