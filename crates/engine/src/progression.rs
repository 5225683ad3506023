//! Progression gate - level-up and slot-access legality
//!
//! A level is complete when every slot expected at it (for the current
//! powerset) is filled. No higher slot may be touched while a lower level
//! is incomplete, and never above the prime level. Rejections always report
//! the FIRST incomplete level, not merely a refusal.

use primebound_domain::{
    is_asi_level, Character, DomainError, SlotKind, ASI_PICKS, POWERSET_BOOST_SLOTS,
};

/// Gate over a character's progression state
pub struct ProgressionGate<'a> {
    character: &'a Character,
}

impl<'a> ProgressionGate<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self { character }
    }

    /// The talent slot kind expected at a level: the powerset's own kind on
    /// odd levels, the generic kind (human variant for human phenotypes) on
    /// even levels. Characters without a powerset use generic slots
    /// throughout.
    pub fn expected_slot_kind(&self, level: u8) -> SlotKind {
        let generic = if self.character.is_human() {
            SlotKind::HumanGenericTalent
        } else {
            SlotKind::GenericTalent
        };
        match self.character.profile() {
            Some(profile) if level % 2 == 1 => profile.talent_slot_kind,
            _ => generic,
        }
    }

    /// Whether every slot expected at this level is filled.
    ///
    /// The powerset choice itself never blocks: playing without a powerset
    /// is a legal, explicit choice.
    pub fn is_level_complete(&self, level: u8) -> bool {
        let record = match self.character.progression.level(level) {
            Some(record) => record,
            None => return false,
        };

        if level == 1 {
            let identity_complete = record
                .phenotype
                .as_ref()
                .map(|p| !p.name.is_empty())
                .unwrap_or(false)
                && record
                    .subtype
                    .as_ref()
                    .map(|s| !s.name.is_empty())
                    .unwrap_or(false)
                && record
                    .background
                    .as_ref()
                    .map(|b| !b.name.is_empty())
                    .unwrap_or(false);
            if !identity_complete {
                return false;
            }
            if self.character.profile().is_some()
                && record.ability_boosts.len() < POWERSET_BOOST_SLOTS
            {
                return false;
            }
        }

        if is_asi_level(level) && record.ability_improvements.len() < ASI_PICKS {
            return false;
        }

        record
            .talent_slot(self.expected_slot_kind(level))
            .map(|slot| slot.is_filled())
            .unwrap_or(false)
    }

    /// First incomplete level strictly below `level`, scanned in ascending
    /// order.
    pub fn first_incomplete_level(&self, level: u8) -> Option<u8> {
        (1..level).find(|l| !self.is_level_complete(*l))
    }

    /// Check that the prime level may be raised to `new_level`: every
    /// current level must be complete. Lowering is always legal.
    pub fn check_level_change(&self, new_level: u8) -> Result<(), DomainError> {
        if new_level == 0 || new_level > 20 {
            return Err(DomainError::validation(format!(
                "Prime level must be 1-20, got {}",
                new_level
            )));
        }
        if new_level <= self.character.basic.prime_level {
            return Ok(());
        }
        match self.first_incomplete_level(new_level) {
            Some(first_incomplete_level) => Err(DomainError::GateViolation {
                first_incomplete_level,
            }),
            None => Ok(()),
        }
    }

    /// Check that slots at `level` may be selected: at or below the prime
    /// level, with every lower level complete.
    pub fn check_slot_access(&self, level: u8) -> Result<(), DomainError> {
        if level == 0 || level > 20 {
            return Err(DomainError::validation(format!(
                "Level must be 1-20, got {}",
                level
            )));
        }
        if level > self.character.basic.prime_level {
            return Err(DomainError::constraint(format!(
                "Level {} is above the prime level {}",
                level, self.character.basic.prime_level
            )));
        }
        match self.first_incomplete_level(level) {
            Some(first_incomplete_level) => Err(DomainError::GateViolation {
                first_incomplete_level,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primebound_domain::{Ability, IdentitySelection, Powerset, TalentSlot};

    fn fill_identity(character: &mut Character) {
        let record = character.progression.level_mut(1);
        record.phenotype = Some(IdentitySelection::new("Human", Ability::Might));
        record.subtype = Some(IdentitySelection::new("Metropolitan", Ability::Wits));
        record.background = Some(IdentitySelection::new("Soldier", Ability::Endurance));
    }

    fn fill_talent(character: &mut Character, level: u8) {
        let kind = ProgressionGate::new(character).expected_slot_kind(level);
        character.progression.level_mut(level).talents.insert(
            kind,
            TalentSlot {
                name: format!("Talent {}", level),
                ..Default::default()
            },
        );
    }

    fn complete_through(character: &mut Character, level: u8) {
        fill_identity(character);
        for l in 1..=level {
            fill_talent(character, l);
            if is_asi_level(l) {
                character.progression.level_mut(l).ability_improvements =
                    vec![Ability::Wits, Ability::Wits];
            }
        }
    }

    #[test]
    fn test_level_one_requires_identity_and_talent() {
        let mut character = Character::new("Test");
        assert!(!ProgressionGate::new(&character).is_level_complete(1));
        fill_identity(&mut character);
        assert!(!ProgressionGate::new(&character).is_level_complete(1));
        fill_talent(&mut character, 1);
        assert!(ProgressionGate::new(&character).is_level_complete(1));
    }

    #[test]
    fn test_powerset_requires_level_one_boosts() {
        let mut character = Character::new("Test");
        character.basic.powerset = Some(Powerset::Bastion);
        fill_identity(&mut character);
        fill_talent(&mut character, 1);
        assert!(!ProgressionGate::new(&character).is_level_complete(1));
        character.progression.level_mut(1).ability_boosts =
            vec![Ability::Might, Ability::Agility];
        assert!(ProgressionGate::new(&character).is_level_complete(1));
    }

    #[test]
    fn test_asi_level_needs_both_picks() {
        let mut character = Character::new("Test");
        character.basic.prime_level = 3;
        complete_through(&mut character, 3);
        character.progression.level_mut(3).ability_improvements = vec![Ability::Wits];
        assert!(!ProgressionGate::new(&character).is_level_complete(3));
        character
            .progression
            .level_mut(3)
            .ability_improvements
            .push(Ability::Presence);
        assert!(ProgressionGate::new(&character).is_level_complete(3));
    }

    #[test]
    fn test_slot_access_reports_first_incomplete_level() {
        let mut character = Character::new("Test");
        character.basic.prime_level = 6;
        complete_through(&mut character, 6);
        // Hollow out level 2 and level 4; the report must name 2.
        character.progression.level_mut(2).talents.clear();
        character.progression.level_mut(4).talents.clear();
        let gate = ProgressionGate::new(&character);
        assert_eq!(
            gate.check_slot_access(6),
            Err(DomainError::GateViolation {
                first_incomplete_level: 2
            })
        );
    }

    #[test]
    fn test_slot_access_rejected_above_prime_level() {
        let mut character = Character::new("Test");
        character.basic.prime_level = 3;
        complete_through(&mut character, 3);
        let gate = ProgressionGate::new(&character);
        assert!(matches!(
            gate.check_slot_access(4),
            Err(DomainError::Constraint(_))
        ));
    }

    #[test]
    fn test_level_increase_requires_all_levels_complete() {
        let mut character = Character::new("Test");
        character.basic.prime_level = 2;
        complete_through(&mut character, 2);
        assert!(ProgressionGate::new(&character).check_level_change(3).is_ok());

        character.progression.level_mut(2).talents.clear();
        assert_eq!(
            ProgressionGate::new(&character).check_level_change(3),
            Err(DomainError::GateViolation {
                first_incomplete_level: 2
            })
        );
    }

    #[test]
    fn test_level_decrease_is_always_legal() {
        let mut character = Character::new("Test");
        character.basic.prime_level = 5;
        assert!(ProgressionGate::new(&character).check_level_change(4).is_ok());
    }

    #[test]
    fn test_odd_levels_use_powerset_slot_kind() {
        let mut character = Character::new("Test");
        character.basic.powerset = Some(Powerset::Marksman);
        character.basic.phenotype = "Human".to_string();
        let gate = ProgressionGate::new(&character);
        assert_eq!(gate.expected_slot_kind(3), SlotKind::MarksmanTalent);
        assert_eq!(gate.expected_slot_kind(4), SlotKind::HumanGenericTalent);
    }
}
