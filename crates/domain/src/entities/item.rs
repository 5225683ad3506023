//! Equipment projections
//!
//! The engine reads only a narrow projection of host item documents:
//! category, base AC, agility cap, might requirement, traits, price, and
//! gadget formulas. Full item data stays with the host.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::value_objects::{
    ArmorModification, ArmorTrait, ArmorWeightClass, DiceFormula, WeaponCategory,
};

/// Armor projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub id: ItemId,
    pub name: String,
    pub weight_class: ArmorWeightClass,
    pub base_ac: i32,
    /// Cap on the agility contribution to AC, if any
    #[serde(default)]
    pub agility_cap: Option<i32>,
    /// Minimum Might to wear without speed and agility penalties
    #[serde(default)]
    pub might_requirement: i32,
    #[serde(default)]
    pub traits: Vec<ArmorTrait>,
    #[serde(default)]
    pub modifications: Vec<ArmorModification>,
    #[serde(default)]
    pub price: Option<i32>,
}

impl Armor {
    pub fn new(name: impl Into<String>, weight_class: ArmorWeightClass, base_ac: i32) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            weight_class,
            base_ac,
            agility_cap: None,
            might_requirement: 0,
            traits: Vec::new(),
            modifications: Vec::new(),
            price: None,
        }
    }

    pub fn with_agility_cap(mut self, cap: i32) -> Self {
        self.agility_cap = Some(cap);
        self
    }

    pub fn with_might_requirement(mut self, requirement: i32) -> Self {
        self.might_requirement = requirement;
        self
    }

    pub fn with_trait(mut self, armor_trait: ArmorTrait) -> Self {
        self.traits.push(armor_trait);
        self
    }

    pub fn with_modification(mut self, modification: ArmorModification) -> Self {
        self.modifications.push(modification);
        self
    }

    /// Total Noisy penalty magnitude across traits.
    pub fn noisy_total(&self) -> i32 {
        self.traits
            .iter()
            .map(|t| match t {
                ArmorTrait::Noisy(n) => *n,
                _ => 0,
            })
            .sum()
    }

    /// Total Stealthy bonus magnitude across traits.
    pub fn stealthy_total(&self) -> i32 {
        self.traits
            .iter()
            .map(|t| match t {
                ArmorTrait::Stealthy(n) => *n,
                _ => 0,
            })
            .sum()
    }

    /// Total silence reduction from modifications.
    pub fn silence_total(&self) -> i32 {
        self.modifications
            .iter()
            .map(|m| match m {
                ArmorModification::Silenced(n) => *n,
                _ => 0,
            })
            .sum()
    }
}

/// Weapon projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: ItemId,
    pub name: String,
    pub categories: Vec<WeaponCategory>,
    /// Hands needed to wield; the equip budget is 2
    pub hands: u8,
    pub damage: DiceFormula,
    #[serde(default)]
    pub price: Option<i32>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, category: WeaponCategory, damage: DiceFormula) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            categories: vec![category],
            hands: 1,
            damage,
            price: None,
        }
    }

    pub fn with_hands(mut self, hands: u8) -> Self {
        self.hands = hands;
        self
    }

    pub fn with_category(mut self, category: WeaponCategory) -> Self {
        self.categories.push(category);
        self
    }
}

/// Gadget projection; gadgets expose formulas verbatim, with no competence
/// folding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gadget {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub damage: Option<DiceFormula>,
    #[serde(default)]
    pub healing: Option<DiceFormula>,
    #[serde(default)]
    pub price: Option<i32>,
}

impl Gadget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            damage: None,
            healing: None,
            price: None,
        }
    }

    pub fn with_damage(mut self, damage: DiceFormula) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_healing(mut self, healing: DiceFormula) -> Self {
        self.healing = Some(healing);
        self
    }
}

/// Kind tag for a character-owned gear row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GearKind {
    Armor,
    Weapon,
    Gadget,
    Equipment,
}

/// A gear row on the character: reference, display cache, equip flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearEntry {
    pub id: ItemId,
    /// Cached display name, re-derivable from the reference
    pub name: String,
    pub kind: GearKind,
    pub equipped: bool,
}

impl GearEntry {
    pub fn new(id: ItemId, name: impl Into<String>, kind: GearKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            equipped: false,
        }
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }
}
