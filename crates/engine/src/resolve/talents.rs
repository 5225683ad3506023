//! Talent catalog view and predicates
//!
//! One indexed pass flattens every talent reference (20 progression levels
//! of slots plus directly-owned talent items) into an ordered entry list.
//! All downstream predicates query this view with explicitly passed context;
//! nothing re-scans the raw progression map.

use primebound_domain::{
    ArmorWeightClass, Character, PowersetProfile, Rank, SlotKind, WeaponCategory,
};

use crate::content::ContentIndex;

/// Name fragment identifying weapon training talents
const WEAPON_TRAINING: &str = "weapon training";

/// Where a catalog entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentOrigin {
    Progression { level: u8, slot: SlotKind },
    Owned,
}

/// One flattened talent entry
#[derive(Debug, Clone)]
pub struct TalentEntry {
    pub name: String,
    pub origin: TalentOrigin,
    pub weapon_category: Option<WeaponCategory>,
    pub training_rank: Option<Rank>,
}

/// The flattened, ordered talent list; a view, rebuilt per resolution and
/// never stored
#[derive(Debug, Default)]
pub struct TalentCatalogView {
    entries: Vec<TalentEntry>,
}

impl TalentCatalogView {
    /// Single indexed pass over the progression map and owned talents.
    /// Unresolved references degrade to the cached display name.
    pub fn build(character: &Character, index: &ContentIndex) -> Self {
        let mut entries = Vec::new();
        for (level, record) in character.progression.iter() {
            for (slot_kind, slot) in &record.talents {
                if !slot.is_filled() {
                    continue;
                }
                let name = index.talent_name(slot.talent, &slot.name).to_string();
                entries.push(TalentEntry {
                    name,
                    origin: TalentOrigin::Progression {
                        level,
                        slot: *slot_kind,
                    },
                    weapon_category: slot.weapon_category,
                    training_rank: slot.training_rank,
                });
            }
        }
        for owned in &character.owned_talents {
            let name = index.talent_name(owned.talent, &owned.name).to_string();
            entries.push(TalentEntry {
                name,
                origin: TalentOrigin::Owned,
                weapon_category: None,
                training_rank: None,
            });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[TalentEntry] {
        &self.entries
    }

    /// Ordered display names, duplicates allowed.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Case-insensitive substring check against every entry name.
    pub fn has_talent(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .any(|e| e.name.to_lowercase().contains(&needle))
    }

    /// Number of entries matching the substring; used by stacking talents.
    pub fn count_talent(&self, needle: &str) -> usize {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .count()
    }

    /// Highest weapon-training rank across entries matching any of the
    /// given categories. Ties between overlapping training sources break
    /// toward the highest rank, never the most recent selection.
    pub fn best_weapon_training(&self, categories: &[WeaponCategory]) -> Option<Rank> {
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(WEAPON_TRAINING))
            .filter(|e| {
                e.weapon_category
                    .map(|c| categories.contains(&c))
                    .unwrap_or(false)
            })
            .map(|e| e.training_rank.unwrap_or(Rank::Apprentice))
            .max()
    }

    /// Training rank for one weapon category.
    pub fn training_rank(&self, category: WeaponCategory) -> Option<Rank> {
        self.best_weapon_training(&[category])
    }

    /// Best armor-training tier from talents and the powerset grant.
    /// Explicit context (the profile) is passed in; the view holds no UI or
    /// powerset state of its own.
    pub fn armor_training(&self, profile: Option<&PowersetProfile>) -> Option<ArmorWeightClass> {
        let from_talents = [
            (ArmorWeightClass::Heavy, "heavy armor training"),
            (ArmorWeightClass::Medium, "medium armor training"),
            (ArmorWeightClass::Light, "light armor training"),
        ]
        .iter()
        .filter(|(_, needle)| self.has_talent(needle))
        .map(|(tier, _)| *tier)
        .max();
        let from_powerset = profile.and_then(|p| p.armor_training);
        from_talents.max(from_powerset)
    }
}
