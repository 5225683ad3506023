//! Combat stat resolution: AC, max HP, initiative, speeds, wound limit
//!
//! Every formula here is a pure function of the snapshot, the resolved
//! ability scores, and the talent view. Missing armor references degrade to
//! the unarmored defaults.

use serde::{Deserialize, Serialize};

use primebound_domain::{
    wound_load, Ability, AbilityScores, Armor, ArmorWeightClass, Character, Powerset,
    StatusEffect,
};

use super::breakdown::Breakdown;
use super::talents::TalentCatalogView;

/// Unarmored base AC
pub const UNARMORED_AC: i32 = 10;
/// Base land speed
pub const BASE_LAND_SPEED: i32 = 25;
/// Swim speed granted by Expert Swimmer
pub const SWIM_SPEED: i32 = 25;
/// Might deficit at which armor immobilizes the wearer
pub const IMMOBILIZING_DEFICIT: i32 = 4;

// Talent names the combat resolver recognizes
pub const IRONBOUND: &str = "Ironbound";
pub const ENHANCED_VITALITY: &str = "Enhanced Vitality";
pub const SWIFT_RUNNER: &str = "Swift Runner";
pub const EXPERT_SWIMMER: &str = "Expert Swimmer";
pub const HARD_TO_KILL: &str = "Hard to Kill";
pub const FLIGHT: &str = "Flight";
pub const SWIFT_FLIGHT: &str = "Swift Flight";
pub const SOARING_FLIGHT: &str = "Soaring Flight";
pub const SUPERSONIC_FLIGHT: &str = "Supersonic Flight";

/// Resolved movement speeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speeds {
    pub land: i32,
    pub swim: Option<i32>,
    pub fly: Option<i32>,
    pub climb: Option<i32>,
}

/// Untrained armor penalty matrix: (worn weight class) x (best training
/// tier). A training tier at or above the worn class zeroes the penalty.
pub fn untrained_armor_penalty(
    worn: ArmorWeightClass,
    training: Option<ArmorWeightClass>,
) -> i32 {
    match (worn, training) {
        (ArmorWeightClass::Light, None) => 3,
        (ArmorWeightClass::Light, Some(_)) => 0,
        (ArmorWeightClass::Medium, None) => 6,
        (ArmorWeightClass::Medium, Some(ArmorWeightClass::Light)) => 3,
        (ArmorWeightClass::Medium, Some(_)) => 0,
        (ArmorWeightClass::Heavy, None) => 9,
        (ArmorWeightClass::Heavy, Some(ArmorWeightClass::Light)) => 6,
        (ArmorWeightClass::Heavy, Some(ArmorWeightClass::Medium)) => 3,
        (ArmorWeightClass::Heavy, Some(ArmorWeightClass::Heavy)) => 0,
    }
}

/// Halve a speed and round up to the nearest multiple of 5.
pub fn halved_speed(speed: i32) -> i32 {
    let halved = (speed + 1) / 2;
    ((halved + 4) / 5) * 5
}

/// Resolve Armor Class with its full breakdown.
pub fn resolve_armor_class(
    character: &Character,
    scores: &AbilityScores,
    talents: &TalentCatalogView,
    armor: Option<&Armor>,
) -> Breakdown {
    let mut breakdown = Breakdown::new();

    match armor {
        Some(armor) => {
            breakdown.push(format!("base ({})", armor.name), armor.base_ac);
            let training = talents.armor_training(character.profile());
            breakdown.push_nonzero(
                "untrained armor",
                -untrained_armor_penalty(armor.weight_class, training),
            );
        }
        None => breakdown.push("base (unarmored)", UNARMORED_AC),
    }

    // Agility contribution: gated by the armor's might requirement, capped
    // by its agility cap, zeroed while stunned or paralyzed, and -2 while
    // off-balance (applied after capping).
    let might_gated = armor
        .map(|a| scores.get(Ability::Might) < a.might_requirement)
        .unwrap_or(false);
    let negated = character
        .combat
        .statuses
        .iter()
        .any(StatusEffect::negates_agility);
    if !might_gated && !negated {
        let mut agility = scores.get(Ability::Agility);
        if let Some(cap) = armor.and_then(|a| a.agility_cap) {
            agility = agility.min(cap);
        }
        breakdown.push_nonzero("Agility", agility);
        if character.has_status(StatusEffect::OffBalance) {
            breakdown.push("Off-Balance", -2);
        }
    }

    if let Some(profile) = character.profile() {
        breakdown.push_nonzero(
            format!("{} powerset", profile.powerset),
            profile.ac_bonus_at(character.basic.prime_level),
        );
    }

    breakdown
}

/// Resolve max HP with its full breakdown.
///
/// Powerset formula: `(base + endurance) * prime_level`, endurance doubled
/// by Ironbound (Bastion only). Characters without a powerset use the
/// manually stored base instead. Enhanced Vitality adds a flat prime-level
/// bonus exactly once; it is a derived term, never a stored increment, so
/// repeated resolution cannot compound it.
pub fn resolve_max_hp(
    character: &Character,
    scores: &AbilityScores,
    talents: &TalentCatalogView,
) -> Breakdown {
    let mut breakdown = Breakdown::new();
    let level = i32::from(character.basic.prime_level);

    match character.profile() {
        Some(profile) => {
            breakdown.push(
                format!("{} base ({} x level {})", profile.powerset, profile.hp_base, level),
                profile.hp_base * level,
            );
            let mut endurance = scores.get(Ability::Endurance);
            let ironbound =
                profile.powerset == Powerset::Bastion && talents.has_talent(IRONBOUND);
            if ironbound {
                endurance *= 2;
            }
            let label = if ironbound {
                format!("Endurance doubled by {} ({} x level {})", IRONBOUND, endurance, level)
            } else {
                format!("Endurance ({} x level {})", endurance, level)
            };
            breakdown.push_nonzero(label, endurance * level);
        }
        None => breakdown.push("stored base", character.combat.base_hp),
    }

    if talents.has_talent(ENHANCED_VITALITY) {
        breakdown.push(ENHANCED_VITALITY, level);
    }

    breakdown
}

/// Resolve initiative: Wits + training rank bonus + stored other bonuses.
pub fn resolve_initiative(character: &Character, scores: &AbilityScores) -> Breakdown {
    let mut breakdown = Breakdown::new();
    breakdown.push("Wits", scores.get(Ability::Wits));
    breakdown.push_nonzero(
        format!("training ({})", character.combat.initiative_rank),
        character.combat.initiative_rank.bonus(),
    );
    breakdown.push_nonzero("other bonuses", character.combat.initiative_bonus);
    breakdown
}

/// Resolve movement speeds.
pub fn resolve_speeds(
    character: &Character,
    scores: &AbilityScores,
    talents: &TalentCatalogView,
    armor: Option<&Armor>,
) -> Speeds {
    let mut land = BASE_LAND_SPEED;
    if talents.has_talent(SWIFT_RUNNER) {
        land += 5;
    }

    // Failing the armor's might requirement slows or immobilizes.
    if let Some(armor) = armor {
        let deficit = armor.might_requirement - scores.get(Ability::Might);
        if deficit >= IMMOBILIZING_DEFICIT {
            land = 0;
        } else if deficit >= 1 {
            land = halved_speed(land);
        }
    }

    let mut swim = talents.has_talent(EXPERT_SWIMMER).then_some(SWIM_SPEED);

    let mut fly = match character.basic.powerset {
        Some(Powerset::Paragon) if talents.has_talent(FLIGHT) => {
            let mut speed = 15;
            if talents.has_talent(SWIFT_FLIGHT) {
                speed += 10;
            }
            if talents.has_talent(SOARING_FLIGHT) {
                speed += 15;
            }
            if talents.has_talent(SUPERSONIC_FLIGHT) {
                speed += 20;
            }
            Some(speed)
        }
        _ => None,
    };

    let mut climb = character.combat.climb_speed;

    if character.has_status(StatusEffect::Blinded) {
        land = halved_speed(land);
        swim = swim.map(halved_speed);
        fly = fly.map(halved_speed);
        climb = climb.map(halved_speed);
    }

    Speeds {
        land,
        swim,
        fly,
        climb,
    }
}

/// Wound limit: 3 + Endurance, +2 with Hard to Kill.
pub fn resolve_wound_limit(scores: &AbilityScores, talents: &TalentCatalogView) -> Breakdown {
    let mut breakdown = Breakdown::new();
    breakdown.push("base", 3);
    breakdown.push_nonzero("Endurance", scores.get(Ability::Endurance));
    if talents.has_talent(HARD_TO_KILL) {
        breakdown.push(HARD_TO_KILL, 2);
    }
    breakdown
}

/// Current wound load: 1 per standard wound, 3 per extreme wound.
pub fn resolve_wound_load(character: &Character) -> i32 {
    wound_load(&character.wounds)
}
