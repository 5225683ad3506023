//! Character aggregate - the root snapshot the engine resolves
//!
//! Everything here is plain serializable state. Derived values (scores, AC,
//! HP, skill totals) are never stored on the aggregate; they exist only in
//! the `DerivedView` produced by the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Attack, GearEntry, GearKind, Progression};
use crate::ids::{CharacterId, TalentId};
use crate::value_objects::{
    Ability, DamageAdjustment, Powerset, PowersetProfile, Rank, StatusEffect, Wound,
};

/// Identity and sizing block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBasic {
    /// Denormalized phenotype name; the level-1 record is the source of truth
    #[serde(default)]
    pub phenotype: String,
    #[serde(default)]
    pub subtype: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub powerset: Option<Powerset>,
    /// Overall level, 1-20
    pub prime_level: u8,
    #[serde(default)]
    pub size: String,
}

/// A one-shot ability use counter, refilled on a long rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityUse {
    pub name: String,
    pub used: u32,
    pub max: u32,
}

impl AbilityUse {
    pub fn new(name: impl Into<String>, max: u32) -> Self {
        Self {
            name: name.into(),
            used: 0,
            max,
        }
    }
}

/// Combat block: stored inputs only, never derived outputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatBlock {
    pub current_hp: i32,
    /// Persisted max HP mirror for display bars; synced by an explicit
    /// write-back step, never read by resolvers
    #[serde(default)]
    pub max_hp: i32,
    /// Manually stored HP base for characters without a powerset
    #[serde(default)]
    pub base_hp: i32,
    #[serde(default)]
    pub initiative_rank: Rank,
    #[serde(default)]
    pub initiative_bonus: i32,
    /// Manually stored climb speed, if the character has one
    #[serde(default)]
    pub climb_speed: Option<i32>,
    #[serde(default)]
    pub statuses: Vec<StatusEffect>,
    #[serde(default)]
    pub ability_uses: Vec<AbilityUse>,
}

/// A stored skill row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub ability: Ability,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub other_bonuses: i32,
    /// Locked rows resist deletion and rank edits outside the progression
    /// flow
    #[serde(default)]
    pub locked: bool,
    /// What granted the row, when not user-entered ("powerset", "armor")
    #[serde(default)]
    pub granted_by: Option<String>,
}

impl SkillEntry {
    pub fn new(ability: Ability) -> Self {
        Self {
            ability,
            rank: Rank::Novice,
            other_bonuses: 0,
            locked: false,
            granted_by: None,
        }
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_other_bonuses(mut self, bonuses: i32) -> Self {
        self.other_bonuses = bonuses;
        self
    }

    /// Whether the row represents real training rather than a grant.
    pub fn independently_trained(&self) -> bool {
        self.granted_by.is_none() && (self.rank > Rank::Novice || self.other_bonuses != 0)
    }
}

/// A stored saving throw row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingThrowEntry {
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub other_bonuses: i32,
}

/// The character aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub basic: CharacterBasic,
    pub combat: CombatBlock,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillEntry>,
    #[serde(default)]
    pub saving_throws: BTreeMap<Ability, SavingThrowEntry>,
    #[serde(default)]
    pub adjustments: Vec<DamageAdjustment>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub wounds: Vec<Wound>,
    #[serde(default)]
    pub gear: Vec<GearEntry>,
    /// Directly-owned talent items, outside the progression map
    #[serde(default)]
    pub owned_talents: Vec<OwnedTalent>,
    pub progression: Progression,
}

/// A talent owned directly as an item rather than through a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedTalent {
    pub talent: Option<TalentId>,
    /// Cached display name, re-derivable from the reference
    pub name: String,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            basic: CharacterBasic {
                prime_level: 1,
                ..Default::default()
            },
            combat: CombatBlock::default(),
            skills: BTreeMap::new(),
            saving_throws: BTreeMap::new(),
            adjustments: Vec::new(),
            attacks: Vec::new(),
            wounds: Vec::new(),
            gear: Vec::new(),
            owned_talents: Vec::new(),
            progression: Progression::new(),
        }
    }

    /// The powerset rules profile, if a powerset is chosen.
    pub fn profile(&self) -> Option<&'static PowersetProfile> {
        self.basic.powerset.map(|p| p.profile())
    }

    /// Whether the phenotype grants the human generic slot variant.
    pub fn is_human(&self) -> bool {
        self.basic.phenotype.eq_ignore_ascii_case("human")
    }

    /// The single equipped armor row, if any. The equip operation enforces
    /// exclusivity; reads take the first match defensively.
    pub fn equipped_armor(&self) -> Option<&GearEntry> {
        self.gear
            .iter()
            .find(|g| g.kind == GearKind::Armor && g.equipped)
    }

    /// All equipped weapon rows.
    pub fn equipped_weapons(&self) -> impl Iterator<Item = &GearEntry> {
        self.gear
            .iter()
            .filter(|g| g.kind == GearKind::Weapon && g.equipped)
    }

    pub fn has_status(&self, status: StatusEffect) -> bool {
        self.combat.statuses.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_is_level_one() {
        let character = Character::new("Meridian");
        assert_eq!(character.basic.prime_level, 1);
        assert!(character.basic.powerset.is_none());
        assert!(character.profile().is_none());
    }

    #[test]
    fn test_equipped_armor_ignores_unequipped_rows() {
        use crate::ids::ItemId;
        let mut character = Character::new("Meridian");
        character
            .gear
            .push(GearEntry::new(ItemId::new(), "Riot Plate", GearKind::Armor));
        assert!(character.equipped_armor().is_none());
        character.gear[0].equipped = true;
        assert!(character.equipped_armor().is_some());
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let character = Character::new("Meridian");
        let json = serde_json::to_string(&character).expect("serialize");
        let back: Character = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, character);
    }
}
