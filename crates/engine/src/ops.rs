//! Mutation operations exposed to collaborators
//!
//! Every operation validates at the boundary and leaves the character
//! unchanged on rejection. Write-backs of derived values (max HP sync) are
//! explicit, separately invocable, and safe to skip in read-only contexts.

use primebound_domain::{
    Ability, Character, DomainError, GearKind, ItemId, Rank, SkillEntry, TalentSlot,
    WeaponCategory, ASI_PICKS, POWERSET_BOOST_SLOTS,
};

use crate::content::ContentIndex;
use crate::progression::ProgressionGate;
use crate::resolve::{resolve, DerivedView};

const WEAPON_TRAINING: &str = "weapon training";

/// Raise or lower the prime level, gated on progression completeness.
pub fn set_prime_level(character: &mut Character, level: u8) -> Result<(), DomainError> {
    ProgressionGate::new(character)
        .check_level_change(level)
        .inspect_err(|error| {
            tracing::warn!(%error, level, "prime level change rejected");
        })?;
    character.basic.prime_level = level;
    Ok(())
}

/// Assign a talent slot at a level, gated on slot access, the talent's
/// minimum prime level, and training-overlap rules.
pub fn assign_talent_slot(
    character: &mut Character,
    level: u8,
    mut slot: TalentSlot,
    index: &ContentIndex,
) -> Result<(), DomainError> {
    let gate = ProgressionGate::new(character);
    gate.check_slot_access(level).inspect_err(|error| {
        tracing::warn!(%error, level, "talent slot access rejected");
    })?;
    let kind = gate.expected_slot_kind(level);

    if let Some(talent) = slot.talent.and_then(|id| index.talent(id)) {
        if talent.level > character.basic.prime_level {
            tracing::warn!(
                talent = %talent.name,
                minimum = talent.level,
                prime = character.basic.prime_level,
                "talent above prime level rejected"
            );
            return Err(DomainError::validation(format!(
                "{} requires prime level {}",
                talent.name, talent.level
            )));
        }
        // Refresh the display cache from the live reference.
        slot.name = talent.name.clone();
        slot.img = talent.img.clone();
    }
    if slot.img.is_empty() {
        slot.img = crate::content::PLACEHOLDER_IMG.to_string();
    }

    // Unarmed training is redundant when the powerset already scales it.
    let resolved_name = index
        .talent_name(slot.talent, &slot.name)
        .to_lowercase();
    if resolved_name.contains(WEAPON_TRAINING)
        && slot.weapon_category == Some(WeaponCategory::UnarmedStrikes)
    {
        let covered = character
            .profile()
            .and_then(|p| p.innate_competence)
            .map(|scope| scope.matches(WeaponCategory::UnarmedStrikes))
            .unwrap_or(false);
        if covered {
            tracing::warn!("unarmed weapon training rejected, powerset already covers it");
            return Err(DomainError::constraint(
                "Unarmed Strikes competence is already granted by the powerset",
            ));
        }
    }

    character.progression.level_mut(level).talents.insert(kind, slot);
    Ok(())
}

/// Clear a talent slot at a level.
pub fn clear_talent_slot(character: &mut Character, level: u8) -> Result<(), DomainError> {
    let kind = ProgressionGate::new(character).expected_slot_kind(level);
    character.progression.level_mut(level).talents.remove(&kind);
    Ok(())
}

/// Select one of the powerset's two free ability boosts. The powerset's
/// innate ability is not a legal target; selecting it is rejected with the
/// prior state intact, never silently dropped.
pub fn select_ability_boost(
    character: &mut Character,
    slot_index: usize,
    ability: Ability,
) -> Result<(), DomainError> {
    let profile = character.profile().ok_or_else(|| {
        DomainError::constraint("Free ability boosts require a powerset")
    })?;
    if slot_index >= POWERSET_BOOST_SLOTS {
        return Err(DomainError::validation(format!(
            "Boost slot {} does not exist",
            slot_index
        )));
    }
    if ability == profile.innate_ability {
        tracing::warn!(
            ability = %ability,
            powerset = %profile.powerset,
            "free boost may not target the innate ability"
        );
        return Err(DomainError::validation(format!(
            "{} is already boosted innately by {}",
            ability, profile.powerset
        )));
    }
    let boosts = &mut character.progression.level_mut(1).ability_boosts;
    if slot_index < boosts.len() {
        boosts[slot_index] = ability;
    } else {
        boosts.push(ability);
    }
    Ok(())
}

/// Assign both Ability Score Improvement picks at an ASI level.
pub fn assign_ability_improvements(
    character: &mut Character,
    level: u8,
    picks: [Ability; ASI_PICKS],
) -> Result<(), DomainError> {
    if !primebound_domain::is_asi_level(level) {
        return Err(DomainError::validation(format!(
            "Level {} grants no ability score improvement",
            level
        )));
    }
    ProgressionGate::new(character)
        .check_slot_access(level)
        .inspect_err(|error| {
            tracing::warn!(%error, level, "improvement assignment rejected");
        })?;
    character.progression.level_mut(level).ability_improvements = picks.to_vec();
    Ok(())
}

/// Add a user-entered skill row.
pub fn add_skill(
    character: &mut Character,
    name: impl Into<String>,
    entry: SkillEntry,
) -> Result<(), DomainError> {
    let name = name.into();
    if let Some(existing) = character.skills.get(&name) {
        if existing.locked {
            return Err(DomainError::constraint(format!("{} is locked", name)));
        }
    }
    character.skills.insert(name, entry);
    Ok(())
}

/// Edit a skill's rank; locked rows resist rank edits.
pub fn set_skill_rank(
    character: &mut Character,
    name: &str,
    rank: Rank,
) -> Result<(), DomainError> {
    let entry = character
        .skills
        .get_mut(name)
        .ok_or_else(|| DomainError::not_found("Skill", name))?;
    if entry.locked {
        tracing::warn!(skill = name, "rank edit on locked skill rejected");
        return Err(DomainError::constraint(format!("{} is locked", name)));
    }
    entry.rank = rank;
    Ok(())
}

/// Edit a skill's stored other-bonuses.
pub fn set_skill_other_bonuses(
    character: &mut Character,
    name: &str,
    other_bonuses: i32,
) -> Result<(), DomainError> {
    let entry = character
        .skills
        .get_mut(name)
        .ok_or_else(|| DomainError::not_found("Skill", name))?;
    entry.other_bonuses = other_bonuses;
    Ok(())
}

/// Delete a skill row; locked rows resist deletion.
pub fn delete_skill(character: &mut Character, name: &str) -> Result<(), DomainError> {
    match character.skills.get(name) {
        None => Err(DomainError::not_found("Skill", name)),
        Some(entry) if entry.locked => {
            tracing::warn!(skill = name, "deletion of locked skill rejected");
            Err(DomainError::constraint(format!("{} is locked", name)))
        }
        Some(_) => {
            character.skills.remove(name);
            Ok(())
        }
    }
}

/// Edit a saving throw's stored other-bonuses.
pub fn set_saving_throw_bonus(character: &mut Character, ability: Ability, other_bonuses: i32) {
    character
        .saving_throws
        .entry(ability)
        .or_default()
        .other_bonuses = other_bonuses;
}

/// Equip an armor row; at most one armor may be equipped at a time, so any
/// other equipped armor is unequipped in the same step.
pub fn equip_armor(character: &mut Character, item: ItemId) -> Result<(), DomainError> {
    let position = character
        .gear
        .iter()
        .position(|g| g.id == item && g.kind == GearKind::Armor)
        .ok_or_else(|| DomainError::not_found("Armor", item.to_string()))?;
    for gear in character.gear.iter_mut() {
        if gear.kind == GearKind::Armor {
            gear.equipped = false;
        }
    }
    character.gear[position].equipped = true;
    Ok(())
}

/// Equip a weapon row, enforcing the two-hand budget across all equipped
/// weapons. Weapons missing from the index count as one-handed.
pub fn equip_weapon(
    character: &mut Character,
    item: ItemId,
    index: &ContentIndex,
) -> Result<(), DomainError> {
    let position = character
        .gear
        .iter()
        .position(|g| g.id == item && g.kind == GearKind::Weapon)
        .ok_or_else(|| DomainError::not_found("Weapon", item.to_string()))?;
    let hands_for = |id: ItemId| index.weapon(id).map(|w| i32::from(w.hands)).unwrap_or(1);
    let in_use: i32 = character
        .equipped_weapons()
        .map(|g| hands_for(g.id))
        .sum();
    let needed = hands_for(item);
    if in_use + needed > 2 {
        tracing::warn!(in_use, needed, "weapon equip exceeds the hands budget");
        return Err(DomainError::constraint(format!(
            "Equipping needs {} hands but only {} are free",
            needed,
            2 - in_use
        )));
    }
    character.gear[position].equipped = true;
    Ok(())
}

/// Unequip any gear row.
pub fn unequip(character: &mut Character, item: ItemId) -> Result<(), DomainError> {
    let gear = character
        .gear
        .iter_mut()
        .find(|g| g.id == item)
        .ok_or_else(|| DomainError::not_found("Gear", item.to_string()))?;
    gear.equipped = false;
    Ok(())
}

/// Long rest: non-extreme wounds heal, one-shot ability uses refill, and
/// current HP is restored to the freshly computed max.
pub fn long_rest(character: &mut Character, index: &ContentIndex) {
    character.wounds.retain(|wound| wound.is_extreme);
    for ability_use in &mut character.combat.ability_uses {
        ability_use.used = 0;
    }
    let view = resolve(character, index);
    character.combat.current_hp = view.max_hp.value;
    character.combat.max_hp = view.max_hp.value;
}

/// Explicit write-back of the computed max HP to the persisted mirror used
/// by display bars. Skippable in read-only contexts.
pub fn sync_hp(character: &mut Character, view: &DerivedView) {
    character.combat.max_hp = view.max_hp.value;
    if character.combat.current_hp > view.max_hp.value {
        character.combat.current_hp = view.max_hp.value;
    }
}
