//! Attack definitions
//!
//! An attack is tied to a weapon, to an innate ability (unarmed strikes), or
//! to a talent-granted power ("Blast"). The cached rank is a fallback used
//! by the competence resolver when neither a training talent nor a powerset
//! rule applies.

use serde::{Deserialize, Serialize};

use crate::ids::{AttackId, ItemId};
use crate::value_objects::{Ability, DiceFormula, Rank, WeaponCategory};

/// Where an attack comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttackSource {
    Weapon(ItemId),
    Innate,
    Talent(String),
}

/// A flat bonus damage die granted by a talent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusDamage {
    /// Talent that must be present for the dice to apply
    pub talent: String,
    pub dice: DiceFormula,
}

/// An attack definition on the character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub id: AttackId,
    pub name: String,
    pub source: AttackSource,
    pub categories: Vec<WeaponCategory>,
    /// Governing ability for attack and damage
    pub ability: Ability,
    /// Flat bonus baked into the attack definition
    #[serde(default)]
    pub base_bonus: i32,
    pub damage: DiceFormula,
    /// Substituted for `damage` while `enhanced_by` is present
    #[serde(default)]
    pub enhanced_damage: Option<DiceFormula>,
    /// Talent name activating the enhanced damage dice
    #[serde(default)]
    pub enhanced_by: Option<String>,
    /// Talent-granted flat bonus dice
    #[serde(default)]
    pub bonus_damage: Option<BonusDamage>,
    /// Rank cached from a previous resolution; a fallback, never
    /// authoritative
    #[serde(default)]
    pub cached_rank: Option<Rank>,
}

impl Attack {
    pub fn new(
        name: impl Into<String>,
        source: AttackSource,
        category: WeaponCategory,
        ability: Ability,
        damage: DiceFormula,
    ) -> Self {
        Self {
            id: AttackId::new(),
            name: name.into(),
            source,
            categories: vec![category],
            ability,
            base_bonus: 0,
            damage,
            enhanced_damage: None,
            enhanced_by: None,
            bonus_damage: None,
            cached_rank: None,
        }
    }

    pub fn with_base_bonus(mut self, bonus: i32) -> Self {
        self.base_bonus = bonus;
        self
    }

    pub fn with_enhanced_damage(mut self, talent: impl Into<String>, dice: DiceFormula) -> Self {
        self.enhanced_by = Some(talent.into());
        self.enhanced_damage = Some(dice);
        self
    }

    pub fn with_bonus_damage(mut self, talent: impl Into<String>, dice: DiceFormula) -> Self {
        self.bonus_damage = Some(BonusDamage {
            talent: talent.into(),
            dice,
        });
        self
    }

    pub fn with_cached_rank(mut self, rank: Rank) -> Self {
        self.cached_rank = Some(rank);
        self
    }

    /// An attack is ranged when any of its categories is.
    pub fn is_ranged(&self) -> bool {
        self.categories.iter().any(WeaponCategory::is_ranged)
    }
}
