//! The five core abilities and the derived score block
//!
//! Scores are never stored as authoritative values: they are always the sum
//! of boost contributions collected from the progression map. `AbilityScores`
//! is the derived result, not an editable field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five core abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    Might,
    Agility,
    Endurance,
    Wits,
    Presence,
}

impl Ability {
    /// All abilities, in canonical display order
    pub const ALL: [Ability; 5] = [
        Ability::Might,
        Ability::Agility,
        Ability::Endurance,
        Ability::Wits,
        Ability::Presence,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Ability::Might => "Might",
            Ability::Agility => "Agility",
            Ability::Endurance => "Endurance",
            Ability::Wits => "Wits",
            Ability::Presence => "Presence",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Derived ability score block, always computed from boost contributions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    pub might: i32,
    pub agility: i32,
    pub endurance: i32,
    pub wits: i32,
    pub presence: i32,
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Might => self.might,
            Ability::Agility => self.agility,
            Ability::Endurance => self.endurance,
            Ability::Wits => self.wits,
            Ability::Presence => self.presence,
        }
    }

    pub fn add(&mut self, ability: Ability, amount: i32) {
        match ability {
            Ability::Might => self.might += amount,
            Ability::Agility => self.agility += amount,
            Ability::Endurance => self.endurance += amount,
            Ability::Wits => self.wits += amount,
            Ability::Presence => self.presence += amount,
        }
    }
}
