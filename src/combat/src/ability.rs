// src/combat/src/ability.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Special ability tags.
///
/// Every hero archetype owns exactly one kind; the boss reuses the same tags
/// as its per-round defence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum AbilityKind {
    #[strum(serialize = "HEAL")]
    Heal,
    #[strum(serialize = "CRITICAL_DAMAGE")]
    CriticalDamage,
    #[strum(serialize = "BOOST")]
    Boost,
    #[strum(serialize = "BLOCK_DAMAGE_REVERT")]
    BlockDamageRevert,
    #[strum(serialize = "ONE_FOR_ALL")]
    OneForAll,
    #[strum(serialize = "SELF_SACRIFICE")]
    SelfSacrifice,
    #[strum(serialize = "DRAKE")]
    Drake,
    #[strum(serialize = "PIONEER_RAGE")]
    PioneerRage,
    #[strum(serialize = "DICEY_SHOT")]
    DiceyShot,
}

impl AbilityKind {
    /// Damage-mitigation kind: the boss's sweep treats holders of this kind
    /// differently unless it is the current defence
    pub fn mitigates(self) -> bool {
        self == AbilityKind::BlockDamageRevert
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_catalog_is_closed() {
        assert_eq!(AbilityKind::iter().count(), 9);
        assert_eq!(
            AbilityKind::iter().filter(|kind| kind.mitigates()).count(),
            1
        );
    }

    #[test]
    fn test_display_uses_catalog_names() {
        assert_eq!(AbilityKind::BlockDamageRevert.to_string(), "BLOCK_DAMAGE_REVERT");
        assert_eq!(AbilityKind::Heal.to_string(), "HEAL");
    }
}
