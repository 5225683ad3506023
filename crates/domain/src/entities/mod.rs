//! Entities: the character aggregate and the external catalog projections

mod attack;
mod character;
mod item;
mod progression;
mod talent;

pub use attack::{Attack, AttackSource, BonusDamage};
pub use character::{
    AbilityUse, Character, CharacterBasic, CombatBlock, OwnedTalent, SavingThrowEntry, SkillEntry,
};
pub use item::{Armor, Gadget, GearEntry, GearKind, Weapon};
pub use progression::{
    is_asi_level, IdentitySelection, LevelRecord, Progression, TalentSlot, ASI_LEVELS, ASI_PICKS,
    POWERSET_BOOST_SLOTS,
};
pub use talent::{Talent, TalentFamily};
