//! Value objects: immutable rules data and small typed values

mod ability;
mod dice;
mod equipment;
mod powerset;
mod rank;
mod status;
mod wound;

pub use ability::{Ability, AbilityScores};
pub use dice::{DiceFormula, DiceParseError};
pub use equipment::{ArmorModification, ArmorTrait, ArmorWeightClass, WeaponCategory};
pub use powerset::{
    CompetenceScope, Powerset, PowersetProfile, SlotKind, INNATE_COMPETENCE_CURVE,
};
pub use rank::Rank;
pub use status::{attack_penalties, StatusEffect, StatusModifier};
pub use wound::{wound_load, AdjustmentKind, DamageAdjustment, Wound};
