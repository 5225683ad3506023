//! Level progression records and slots
//!
//! A character carries one sparse `LevelRecord` per level 1-20. Every named
//! slot is a choice point that must be filled before higher levels unlock.
//! Talent slots denormalize the talent's display name and image next to the
//! reference; the cache is for display only and is always re-derivable from
//! the reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::TalentId;
use crate::value_objects::{Ability, Powerset, Rank, SlotKind, WeaponCategory};

/// Levels granting two Ability Score Improvement picks each
pub const ASI_LEVELS: [u8; 8] = [3, 5, 8, 10, 13, 15, 18, 20];

/// Number of free ability-boost slots a powerset grants at level 1
pub const POWERSET_BOOST_SLOTS: usize = 2;

/// Number of picks per Ability Score Improvement level
pub const ASI_PICKS: usize = 2;

pub fn is_asi_level(level: u8) -> bool {
    ASI_LEVELS.contains(&level)
}

/// A level-1 identity choice (phenotype, subtype, background) and the
/// ability it boosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySelection {
    pub name: String,
    pub boost: Option<Ability>,
}

impl IdentitySelection {
    pub fn new(name: impl Into<String>, boost: Ability) -> Self {
        Self {
            name: name.into(),
            boost: Some(boost),
        }
    }
}

/// A talent slot: the reference plus its denormalized display cache and
/// slot-specific auxiliary fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSlot {
    /// The talent reference; source of truth for the slot
    pub talent: Option<TalentId>,
    /// Cached display name, re-derivable from the reference
    #[serde(default)]
    pub name: String,
    /// Cached display image, re-derivable from the reference
    #[serde(default)]
    pub img: String,
    /// Weapon category for weapon-training style slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_category: Option<WeaponCategory>,
    /// Training rank for training-style talents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_rank: Option<Rank>,
}

impl TalentSlot {
    pub fn new(talent: TalentId, name: impl Into<String>) -> Self {
        Self {
            talent: Some(talent),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_weapon_category(mut self, category: WeaponCategory) -> Self {
        self.weapon_category = Some(category);
        self
    }

    pub fn with_training_rank(mut self, rank: Rank) -> Self {
        self.training_rank = Some(rank);
        self
    }

    /// A slot counts as filled when it has a reference or at least a cached
    /// name (reference may have degraded, see the content index).
    pub fn is_filled(&self) -> bool {
        self.talent.is_some() || !self.name.is_empty()
    }
}

/// One level's worth of choices; all fields sparse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    /// Level 1 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phenotype: Option<IdentitySelection>,
    /// Level 1 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<IdentitySelection>,
    /// Level 1 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<IdentitySelection>,
    /// Level 1 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerset: Option<Powerset>,
    /// Talent slots keyed by kind
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub talents: BTreeMap<SlotKind, TalentSlot>,
    /// Powerset free ability boosts (level 1, up to two, +1 each)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ability_boosts: Vec<Ability>,
    /// Ability Score Improvement picks (ASI levels, two, +1 each)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ability_improvements: Vec<Ability>,
}

impl LevelRecord {
    pub fn talent_slot(&self, kind: SlotKind) -> Option<&TalentSlot> {
        self.talents.get(&kind)
    }
}

/// The full progression map, levels 1-20
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    levels: BTreeMap<u8, LevelRecord>,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, level: u8) -> Option<&LevelRecord> {
        self.levels.get(&level)
    }

    /// Mutable access, creating an empty record on first touch.
    pub fn level_mut(&mut self, level: u8) -> &mut LevelRecord {
        self.levels.entry(level).or_default()
    }

    /// Iterate filled records in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &LevelRecord)> {
        self.levels.iter().map(|(level, record)| (*level, record))
    }

    /// The powerset chosen at level 1, if any.
    pub fn chosen_powerset(&self) -> Option<Powerset> {
        self.level(1).and_then(|record| record.powerset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asi_levels() {
        assert!(is_asi_level(3));
        assert!(is_asi_level(20));
        assert!(!is_asi_level(4));
        assert!(!is_asi_level(1));
    }

    #[test]
    fn test_slot_filled_by_cache_alone() {
        let mut slot = TalentSlot::default();
        assert!(!slot.is_filled());
        slot.name = "Shield Wall".to_string();
        assert!(slot.is_filled());
    }

    #[test]
    fn test_level_mut_creates_sparse_records() {
        let mut progression = Progression::new();
        assert!(progression.level(5).is_none());
        progression.level_mut(5).ability_improvements.push(Ability::Wits);
        assert!(progression.level(5).is_some());
        assert!(progression.level(4).is_none());
    }
}
