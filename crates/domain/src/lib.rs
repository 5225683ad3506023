//! Primebound domain layer
//!
//! Plain serializable character state, the external catalog projections,
//! and the rules data every resolver consumes (rank table, powerset
//! profiles, status penalties). No derived value is ever stored here; the
//! engine crate computes those from a snapshot of these types.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    is_asi_level, AbilityUse, Armor, Attack, AttackSource, BonusDamage, Character, CharacterBasic,
    CombatBlock, Gadget, GearEntry, GearKind, IdentitySelection, LevelRecord, OwnedTalent,
    Progression, SavingThrowEntry, SkillEntry, Talent, TalentFamily, TalentSlot, Weapon,
    ASI_LEVELS, ASI_PICKS, POWERSET_BOOST_SLOTS,
};
pub use error::DomainError;
pub use ids::{AttackId, CharacterId, ItemId, TalentId};
pub use value_objects::{
    attack_penalties, wound_load, Ability, AbilityScores, AdjustmentKind, ArmorModification,
    ArmorTrait, ArmorWeightClass, CompetenceScope, DamageAdjustment, DiceFormula, DiceParseError,
    Powerset, PowersetProfile, Rank, SlotKind, StatusEffect, StatusModifier, WeaponCategory,
    Wound, INNATE_COMPETENCE_CURVE,
};
