//! Skill and saving throw resolution
//!
//! Every total is `ability score + rank bonus + other bonuses`. Two skills
//! are synthesized rather than user-entered: the powerset's fixed grants
//! (Bastion's Heavy Armor) and a Stealth row derived from equipped armor
//! traits. Synthesized rows vanish from the view as soon as their trigger
//! goes away, unless the skill was independently trained.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use primebound_domain::{Ability, AbilityScores, Armor, Character, Rank};

use super::breakdown::Breakdown;

/// Grant tag for armor-derived skill rows
pub const GRANTED_BY_ARMOR: &str = "armor";
/// Grant tag for powerset-derived skill rows
pub const GRANTED_BY_POWERSET: &str = "powerset";

const STEALTH: &str = "Stealth";

/// A resolved skill row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub ability: Ability,
    pub rank: Rank,
    pub other_bonuses: i32,
    pub total: i32,
    /// Locked rows may not be deleted or rank-edited outside the
    /// progression flow
    pub locked: bool,
    /// True for rows the resolver created rather than read from storage
    pub synthesized: bool,
    pub breakdown: Breakdown,
}

fn skill_view(
    ability: Ability,
    rank: Rank,
    other_bonuses: i32,
    locked: bool,
    synthesized: bool,
    scores: &AbilityScores,
) -> SkillView {
    let mut breakdown = Breakdown::new();
    breakdown.push(ability.display_name(), scores.get(ability));
    breakdown.push_nonzero(format!("training ({})", rank), rank.bonus());
    breakdown.push_nonzero("other bonuses", other_bonuses);
    SkillView {
        ability,
        rank,
        other_bonuses,
        total: breakdown.total(),
        locked,
        synthesized,
        breakdown,
    }
}

/// Net Stealth modifier from armor traits: `stealthy - noisy`, with any
/// silence reduction shrinking a net penalty toward zero but never flipping
/// it into a bonus.
pub fn armor_stealth_modifier(armor: &Armor) -> i32 {
    let raw = armor.stealthy_total() - armor.noisy_total();
    if raw < 0 {
        (raw + armor.silence_total()).min(0)
    } else {
        raw
    }
}

/// Resolve the skill map.
pub fn resolve_skills(
    character: &Character,
    scores: &AbilityScores,
    armor: Option<&Armor>,
) -> BTreeMap<String, SkillView> {
    let mut skills = BTreeMap::new();
    let stealth_mod = armor.map(armor_stealth_modifier).unwrap_or(0);
    let armor_has_stealth_traits = armor
        .map(|a| a.noisy_total() != 0 || a.stealthy_total() != 0)
        .unwrap_or(false);

    for (name, entry) in &character.skills {
        // A previously armor-granted Stealth row disappears once the
        // trigger is gone, unless it was trained in its own right.
        if entry.granted_by.as_deref() == Some(GRANTED_BY_ARMOR)
            && !armor_has_stealth_traits
            && !entry.independently_trained()
        {
            continue;
        }
        let other = if name == STEALTH && armor_has_stealth_traits {
            // Armor traits overwrite the stored other-bonuses.
            stealth_mod
        } else {
            entry.other_bonuses
        };
        skills.insert(
            name.clone(),
            skill_view(entry.ability, entry.rank, other, entry.locked, false, scores),
        );
    }

    // Powerset fixed grants, locked against outside edits.
    if let Some(profile) = character.profile() {
        for (name, ability, rank) in profile.granted_skills {
            match skills.get_mut(*name) {
                Some(existing) => {
                    existing.locked = true;
                    if existing.rank < *rank {
                        *existing =
                            skill_view(existing.ability, *rank, existing.other_bonuses, true, false, scores);
                    }
                }
                None => {
                    skills.insert(
                        name.to_string(),
                        skill_view(*ability, *rank, 0, true, true, scores),
                    );
                }
            }
        }
    }

    // Armor-derived Stealth row when no stored row exists.
    if armor_has_stealth_traits && !skills.contains_key(STEALTH) {
        skills.insert(
            STEALTH.to_string(),
            skill_view(Ability::Agility, Rank::Novice, stealth_mod, false, true, scores),
        );
    }

    skills
}

/// A resolved saving throw row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingThrowView {
    pub rank: Rank,
    pub other_bonuses: i32,
    pub total: i32,
    pub breakdown: Breakdown,
}

/// Resolve all five saving throws; unsaved abilities default to Novice.
pub fn resolve_saving_throws(
    character: &Character,
    scores: &AbilityScores,
) -> BTreeMap<Ability, SavingThrowView> {
    Ability::ALL
        .iter()
        .map(|ability| {
            let entry = character
                .saving_throws
                .get(ability)
                .copied()
                .unwrap_or_default();
            let mut breakdown = Breakdown::new();
            breakdown.push(ability.display_name(), scores.get(*ability));
            breakdown.push_nonzero(format!("training ({})", entry.rank), entry.rank.bonus());
            breakdown.push_nonzero("other bonuses", entry.other_bonuses);
            (
                *ability,
                SavingThrowView {
                    rank: entry.rank,
                    other_bonuses: entry.other_bonuses,
                    total: breakdown.total(),
                    breakdown,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primebound_domain::{ArmorTrait, ArmorModification, ArmorWeightClass, Powerset, SkillEntry};

    #[test]
    fn test_skill_total_formula() {
        let mut character = Character::new("Test");
        character.skills.insert(
            "Investigation".to_string(),
            SkillEntry::new(Ability::Wits)
                .with_rank(Rank::Competent)
                .with_other_bonuses(1),
        );
        let scores = AbilityScores {
            wits: 3,
            ..Default::default()
        };
        let skills = resolve_skills(&character, &scores, None);
        assert_eq!(skills["Investigation"].total, 12); // 3 + 8 + 1
    }

    #[test]
    fn test_bastion_grants_locked_heavy_armor_skill() {
        let mut character = Character::new("Test");
        character.basic.powerset = Some(Powerset::Bastion);
        let skills = resolve_skills(&character, &AbilityScores::default(), None);
        let heavy = &skills["Heavy Armor"];
        assert!(heavy.locked);
        assert!(heavy.synthesized);
        assert_eq!(heavy.rank, Rank::Apprentice);
    }

    #[test]
    fn test_noisy_armor_synthesizes_stealth_penalty() {
        let character = Character::new("Test");
        let armor = Armor::new("Riot Plate", ArmorWeightClass::Heavy, 16)
            .with_trait(ArmorTrait::Noisy(3));
        let skills = resolve_skills(&character, &AbilityScores::default(), Some(&armor));
        let stealth = &skills["Stealth"];
        assert!(stealth.synthesized);
        assert_eq!(stealth.other_bonuses, -3);
    }

    #[test]
    fn test_silence_shrinks_penalty_but_never_flips_it() {
        let noisy = Armor::new("Riot Plate", ArmorWeightClass::Heavy, 16)
            .with_trait(ArmorTrait::Noisy(2))
            .with_modification(ArmorModification::Silenced(5));
        assert_eq!(armor_stealth_modifier(&noisy), 0);

        let sneaky = Armor::new("Shadow Weave", ArmorWeightClass::Light, 11)
            .with_trait(ArmorTrait::Stealthy(2));
        assert_eq!(armor_stealth_modifier(&sneaky), 2);
    }

    #[test]
    fn test_armor_traits_overwrite_stored_stealth_bonus() {
        let mut character = Character::new("Test");
        character.skills.insert(
            "Stealth".to_string(),
            SkillEntry::new(Ability::Agility)
                .with_rank(Rank::Apprentice)
                .with_other_bonuses(5),
        );
        let armor = Armor::new("Riot Plate", ArmorWeightClass::Heavy, 16)
            .with_trait(ArmorTrait::Noisy(2));
        let skills = resolve_skills(&character, &AbilityScores::default(), Some(&armor));
        assert_eq!(skills["Stealth"].other_bonuses, -2);
        assert_eq!(skills["Stealth"].rank, Rank::Apprentice);
    }

    #[test]
    fn test_armor_granted_stealth_removed_when_trigger_gone() {
        let mut character = Character::new("Test");
        let mut entry = SkillEntry::new(Ability::Agility);
        entry.granted_by = Some(GRANTED_BY_ARMOR.to_string());
        character.skills.insert("Stealth".to_string(), entry);
        let skills = resolve_skills(&character, &AbilityScores::default(), None);
        assert!(!skills.contains_key("Stealth"));
    }

    #[test]
    fn test_trained_stealth_survives_trigger_removal() {
        let mut character = Character::new("Test");
        let mut entry = SkillEntry::new(Ability::Agility).with_rank(Rank::Competent);
        entry.granted_by = None;
        character.skills.insert("Stealth".to_string(), entry);
        let skills = resolve_skills(&character, &AbilityScores::default(), None);
        assert!(skills.contains_key("Stealth"));
    }

    #[test]
    fn test_saving_throws_default_to_novice() {
        let character = Character::new("Test");
        let scores = AbilityScores {
            endurance: 2,
            ..Default::default()
        };
        let saves = resolve_saving_throws(&character, &scores);
        assert_eq!(saves[&Ability::Endurance].total, 2);
        assert_eq!(saves[&Ability::Might].total, 0);
        assert_eq!(saves.len(), 5);
    }
}
