//! Powerset archetypes and their rules data
//!
//! Every powerset-dependent rule lives in one `PowersetProfile` record per
//! archetype (innate ability, HP base, AC curve, innate weapon competence,
//! talent slot kind, skill and armor-training grants). Resolvers consume the
//! profile generically instead of branching on the powerset name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Ability, ArmorWeightClass, Rank, WeaponCategory};

/// Character archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Powerset {
    Bastion,
    Paragon,
    Marksman,
    Gadgeteer,
}

/// Kinds of talent slot a level record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    GenericTalent,
    HumanGenericTalent,
    BastionTalent,
    ParagonTalent,
    MarksmanTalent,
    GadgeteerTalent,
    PowersetTalent,
}

impl SlotKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SlotKind::GenericTalent => "Generic Talent",
            SlotKind::HumanGenericTalent => "Human Generic Talent",
            SlotKind::BastionTalent => "Bastion Talent",
            SlotKind::ParagonTalent => "Paragon Talent",
            SlotKind::MarksmanTalent => "Marksman Talent",
            SlotKind::GadgeteerTalent => "Gadgeteer Talent",
            SlotKind::PowersetTalent => "Powerset Talent",
        }
    }
}

/// Which attacks a powerset's innate competence curve applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetenceScope {
    UnarmedStrikes,
    RangedWeapons,
}

impl CompetenceScope {
    pub fn matches(&self, category: WeaponCategory) -> bool {
        match self {
            CompetenceScope::UnarmedStrikes => category == WeaponCategory::UnarmedStrikes,
            CompetenceScope::RangedWeapons => category.is_ranged(),
        }
    }
}

/// Level-indexed competence curve shared by Paragon (unarmed) and Marksman
/// (ranged): Apprentice at 1, Competent at 5, Masterful at 10, Legendary at 15.
pub const INNATE_COMPETENCE_CURVE: [(u8, Rank); 4] = [
    (1, Rank::Apprentice),
    (5, Rank::Competent),
    (10, Rank::Masterful),
    (15, Rank::Legendary),
];

/// Rules data for one powerset, consumed generically by every resolver
#[derive(Debug, Clone, Copy)]
pub struct PowersetProfile {
    pub powerset: Powerset,
    /// Ability receiving the fixed innate boost; also forbidden as a free
    /// ability-boost target
    pub innate_ability: Ability,
    /// Per-level HP base in `(base + endurance) * prime_level`
    pub hp_base: i32,
    /// AC bonus breakpoints `(level, bonus)`; highest breakpoint at or below
    /// the prime level applies. Empty for powersets without an AC bonus.
    pub ac_curve: &'static [(u8, i32)],
    /// Innate weapon competence, if any, scaling on
    /// [`INNATE_COMPETENCE_CURVE`]
    pub innate_competence: Option<CompetenceScope>,
    /// The powerset-specific talent slot kind
    pub talent_slot_kind: SlotKind,
    /// Skills granted (and locked) by the powerset
    pub granted_skills: &'static [(&'static str, Ability, Rank)],
    /// Armor training tier granted by the powerset
    pub armor_training: Option<ArmorWeightClass>,
}

const BASTION_AC_CURVE: [(u8, i32); 5] = [(1, 2), (5, 4), (10, 6), (15, 8), (20, 10)];

const BASTION: PowersetProfile = PowersetProfile {
    powerset: Powerset::Bastion,
    innate_ability: Ability::Endurance,
    hp_base: 14,
    ac_curve: &BASTION_AC_CURVE,
    innate_competence: None,
    talent_slot_kind: SlotKind::BastionTalent,
    granted_skills: &[("Heavy Armor", Ability::Might, Rank::Apprentice)],
    armor_training: Some(ArmorWeightClass::Heavy),
};

const PARAGON: PowersetProfile = PowersetProfile {
    powerset: Powerset::Paragon,
    innate_ability: Ability::Might,
    hp_base: 12,
    ac_curve: &[],
    innate_competence: Some(CompetenceScope::UnarmedStrikes),
    talent_slot_kind: SlotKind::ParagonTalent,
    granted_skills: &[],
    armor_training: None,
};

const MARKSMAN: PowersetProfile = PowersetProfile {
    powerset: Powerset::Marksman,
    innate_ability: Ability::Agility,
    hp_base: 8,
    ac_curve: &[],
    innate_competence: Some(CompetenceScope::RangedWeapons),
    talent_slot_kind: SlotKind::MarksmanTalent,
    granted_skills: &[],
    armor_training: None,
};

const GADGETEER: PowersetProfile = PowersetProfile {
    powerset: Powerset::Gadgeteer,
    innate_ability: Ability::Wits,
    hp_base: 8,
    ac_curve: &[],
    innate_competence: None,
    talent_slot_kind: SlotKind::GadgeteerTalent,
    granted_skills: &[],
    armor_training: None,
};

impl Powerset {
    pub const ALL: [Powerset; 4] = [
        Powerset::Bastion,
        Powerset::Paragon,
        Powerset::Marksman,
        Powerset::Gadgeteer,
    ];

    pub fn profile(&self) -> &'static PowersetProfile {
        match self {
            Powerset::Bastion => &BASTION,
            Powerset::Paragon => &PARAGON,
            Powerset::Marksman => &MARKSMAN,
            Powerset::Gadgeteer => &GADGETEER,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Powerset::Bastion => "Bastion",
            Powerset::Paragon => "Paragon",
            Powerset::Marksman => "Marksman",
            Powerset::Gadgeteer => "Gadgeteer",
        }
    }
}

impl fmt::Display for Powerset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl PowersetProfile {
    /// AC bonus at the given prime level: highest breakpoint at or below it.
    pub fn ac_bonus_at(&self, prime_level: u8) -> i32 {
        self.ac_curve
            .iter()
            .filter(|(breakpoint, _)| *breakpoint <= prime_level)
            .map(|(_, bonus)| *bonus)
            .last()
            .unwrap_or(0)
    }

    /// Innate competence rank for an attack category at the given prime
    /// level, if this powerset's scope covers the category.
    pub fn innate_rank_at(&self, category: WeaponCategory, prime_level: u8) -> Option<Rank> {
        let scope = self.innate_competence?;
        if !scope.matches(category) {
            return None;
        }
        INNATE_COMPETENCE_CURVE
            .iter()
            .filter(|(breakpoint, _)| *breakpoint <= prime_level)
            .map(|(_, rank)| *rank)
            .last()
    }
}
