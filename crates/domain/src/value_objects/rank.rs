//! Competence ranks and their fixed numeric bonuses
//!
//! Every trained capability in the system (skills, saving throws, initiative,
//! weapon competence) maps a rank to a flat bonus through this table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Competence rank tier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    /// Untrained (+0)
    #[default]
    Novice,
    /// Basic training (+4)
    Apprentice,
    /// Solid training (+8)
    Competent,
    /// Mastery (+12)
    Masterful,
    /// Ultimate mastery (+16)
    Legendary,
}

impl Rank {
    /// Get the flat bonus for this rank.
    pub fn bonus(&self) -> i32 {
        match self {
            Rank::Novice => 0,
            Rank::Apprentice => 4,
            Rank::Competent => 8,
            Rank::Masterful => 12,
            Rank::Legendary => 16,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rank::Novice => "Novice",
            Rank::Apprentice => "Apprentice",
            Rank::Competent => "Competent",
            Rank::Masterful => "Masterful",
            Rank::Legendary => "Legendary",
        }
    }

    /// Parse a rank from its display name (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "novice" => Some(Rank::Novice),
            "apprentice" => Some(Rank::Apprentice),
            "competent" => Some(Rank::Competent),
            "masterful" => Some(Rank::Masterful),
            "legendary" => Some(Rank::Legendary),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
