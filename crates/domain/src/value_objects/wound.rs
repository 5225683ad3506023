//! Wounds and damage adjustments

use serde::{Deserialize, Serialize};

/// A wound carried by the character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wound {
    /// Body location, free text ("Left Arm", "Torso")
    pub location: String,
    /// Extreme wounds weigh 3 load and survive a long rest
    pub is_extreme: bool,
}

impl Wound {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            is_extreme: false,
        }
    }

    pub fn extreme(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            is_extreme: true,
        }
    }

    /// Wound load contribution: 1 standard, 3 extreme.
    pub fn load(&self) -> i32 {
        if self.is_extreme {
            3
        } else {
            1
        }
    }
}

/// Total wound load for a wound list.
pub fn wound_load(wounds: &[Wound]) -> i32 {
    wounds.iter().map(Wound::load).sum()
}

/// Whether an adjustment reduces, increases, or negates incoming damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdjustmentKind {
    Resistance,
    Weakness,
    Immunity,
}

/// A resistance, weakness, or immunity entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageAdjustment {
    pub kind: AdjustmentKind,
    pub damage_type: String,
    /// Flat amount; `None` for all-of-type (immunities never carry a value)
    pub value: Option<i32>,
    /// Where the adjustment came from ("Stoneskin talent", "Insulated Suit")
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wound_load_weights() {
        let wounds = vec![
            Wound::new("Left Arm"),
            Wound::new("Torso"),
            Wound::extreme("Head"),
        ];
        assert_eq!(wound_load(&wounds), 5);
    }
}
