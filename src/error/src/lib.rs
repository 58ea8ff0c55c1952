//! Battle error handling
//!
//! Errors raised while building or driving a battle. Runtime stat changes never
//! fail (health clamps at zero), so everything here is either a validation
//! failure at construction time or a violated engine precondition.

use thiserror::Error;

/// Errors that can occur while setting up or running a battle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Initial health below zero
    #[error("{name} cannot start with negative health ({health})")]
    NegativeHealth { name: String, health: i64 },

    /// Combatant constructed without a name
    #[error("combatant name must not be empty")]
    EmptyName,

    /// Roster-wide operation invoked on an empty roster
    #[error("roster is empty")]
    EmptyRoster,

    /// Dispatch addressed a hero that is not in the roster
    #[error("hero index {index} out of range for roster of {len}")]
    HeroIndexOutOfRange { index: usize, len: usize },

    /// Safety bound on the number of rounds was hit
    #[error("battle still undecided after {limit} rounds")]
    RoundLimitReached { limit: u32 },

    /// A round was requested after the battle ended
    #[error("battle is already over")]
    BattleOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = BattleError::NegativeHealth {
            name: "Gatz".to_string(),
            health: -5,
        };
        assert_eq!(err.to_string(), "Gatz cannot start with negative health (-5)");
    }

    #[test]
    fn test_engine_error_messages() {
        assert_eq!(
            BattleError::RoundLimitReached { limit: 3 }.to_string(),
            "battle still undecided after 3 rounds"
        );
        assert_eq!(
            BattleError::HeroIndexOutOfRange { index: 4, len: 2 }.to_string(),
            "hero index 4 out of range for roster of 2"
        );
    }
}
