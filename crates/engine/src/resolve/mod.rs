//! The resolution pipeline
//!
//! `resolve` is the one entry point: snapshot + content index in, derived
//! view out. It is pure and idempotent; invoking it twice on the same
//! snapshot yields identical views, and nothing is written back to the
//! character (write-backs are explicit, separate operations in `ops`).

pub mod abilities;
pub mod attacks;
pub mod breakdown;
pub mod combat;
pub mod skills;
pub mod talents;
pub mod view;

use primebound_domain::{Armor, Character, DamageAdjustment};

use crate::content::ContentIndex;

pub use abilities::{resolve_abilities, AbilityResolution};
pub use attacks::{resolve_attack, resolve_competence, AttackView, CompetenceSource, GadgetView};
pub use breakdown::{Breakdown, BreakdownTerm};
pub use combat::{halved_speed, untrained_armor_penalty, Speeds};
pub use skills::{resolve_saving_throws, resolve_skills, SavingThrowView, SkillView};
pub use talents::{TalentCatalogView, TalentEntry, TalentOrigin};
pub use view::{DerivedStat, DerivedView};

/// Look up the equipped armor's projection, degrading to unarmored when the
/// reference is absent from the index.
fn equipped_armor<'a>(character: &Character, index: &'a ContentIndex) -> Option<&'a Armor> {
    let entry = character.equipped_armor()?;
    match index.armor(entry.id) {
        Some(armor) => Some(armor),
        None => {
            tracing::debug!(
                id = %entry.id,
                cached = %entry.name,
                "equipped armor reference unresolved, treating as unarmored"
            );
            None
        }
    }
}

/// Merge adjustment rows per (kind, damage type), concatenating sources and
/// keeping the strongest value.
fn merge_adjustments(rows: &[DamageAdjustment]) -> Vec<DamageAdjustment> {
    let mut merged: Vec<DamageAdjustment> = Vec::new();
    for row in rows {
        match merged
            .iter_mut()
            .find(|m| m.kind == row.kind && m.damage_type == row.damage_type)
        {
            Some(existing) => {
                existing.value = match (existing.value, row.value) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    // A valueless row means all-of-type
                    _ => None,
                };
                existing.source = format!("{}, {}", existing.source, row.source);
            }
            None => merged.push(row.clone()),
        }
    }
    merged
}

/// Resolve a character snapshot into the full derived view.
pub fn resolve(character: &Character, index: &ContentIndex) -> DerivedView {
    tracing::debug!(character = %character.name, level = character.basic.prime_level, "resolving derived view");

    let talents = TalentCatalogView::build(character, index);
    let ability_resolution = resolve_abilities(character);
    let scores = ability_resolution.scores;
    let armor = equipped_armor(character, index);

    let mut sorted_adjustments = character.adjustments.clone();
    sorted_adjustments.sort_by(|a, b| {
        (a.kind, a.damage_type.clone()).cmp(&(b.kind, b.damage_type.clone()))
    });

    DerivedView {
        abilities: scores,
        ability_breakdowns: ability_resolution.breakdowns,
        armor_class: combat::resolve_armor_class(character, &scores, &talents, armor).into(),
        max_hp: combat::resolve_max_hp(character, &scores, &talents).into(),
        initiative: combat::resolve_initiative(character, &scores).into(),
        speeds: combat::resolve_speeds(character, &scores, &talents, armor),
        skills: resolve_skills(character, &scores, armor),
        saving_throws: resolve_saving_throws(character, &scores),
        attacks: character
            .attacks
            .iter()
            .map(|attack| resolve_attack(attack, character, &scores, &talents))
            .collect(),
        gadgets: attacks::resolve_gadgets(character, index),
        wound_limit: combat::resolve_wound_limit(&scores, &talents).into(),
        wound_load: combat::resolve_wound_load(character),
        adjustments: merge_adjustments(&sorted_adjustments),
    }
}

/// Resolve a raw JSON snapshot, falling back to the minimal renderable view
/// when the snapshot cannot be deserialized. The sheet keeps rendering even
/// when the stored document is broken.
pub fn resolve_or_minimal(snapshot: &str, index: &ContentIndex) -> DerivedView {
    match serde_json::from_str::<Character>(snapshot) {
        Ok(character) => resolve(&character, index),
        Err(error) => {
            tracing::error!(%error, "snapshot failed to deserialize, serving minimal view");
            DerivedView::minimal()
        }
    }
}
