//! Equipment vocabulary shared by item projections and powerset profiles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Armor weight class, the row axis of the untrained-armor penalty matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArmorWeightClass {
    Light,
    Medium,
    Heavy,
}

impl ArmorWeightClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            ArmorWeightClass::Light => "Light",
            ArmorWeightClass::Medium => "Medium",
            ArmorWeightClass::Heavy => "Heavy",
        }
    }

    /// Whether training at this tier also covers `worn`.
    ///
    /// Heavy training subsumes medium and light; medium subsumes light.
    pub fn covers(&self, worn: ArmorWeightClass) -> bool {
        *self >= worn
    }
}

impl fmt::Display for ArmorWeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Weapon category, used for training talents and innate powerset competence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    UnarmedStrikes,
    LightMelee,
    HeavyMelee,
    Ranged,
    Thrown,
    Improvised,
}

impl WeaponCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            WeaponCategory::UnarmedStrikes => "Unarmed Strikes",
            WeaponCategory::LightMelee => "Light Melee",
            WeaponCategory::HeavyMelee => "Heavy Melee",
            WeaponCategory::Ranged => "Ranged",
            WeaponCategory::Thrown => "Thrown",
            WeaponCategory::Improvised => "Improvised",
        }
    }

    /// Ranged categories take ranged-only penalties and bonuses
    /// (Deadeye, firing while climbing or flying).
    pub fn is_ranged(&self) -> bool {
        matches!(self, WeaponCategory::Ranged | WeaponCategory::Thrown)
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A parsed armor trait
///
/// Host item data carries these as strings like `Noisy(2)`; the engine's
/// content layer parses them into this structured form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArmorTrait {
    /// Stealth penalty of the given magnitude
    Noisy(i32),
    /// Stealth bonus of the given magnitude
    Stealthy(i32),
    /// Trait the engine does not interpret
    Other(String),
}

/// An armor modification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArmorModification {
    /// Reduces the Noisy penalty by the given amount
    Silenced(i32),
    /// Modification the engine does not interpret
    Other(String),
}
