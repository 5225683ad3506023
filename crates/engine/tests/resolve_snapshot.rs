//! End-to-end resolution of a persisted character snapshot
//!
//! Deserializes a full JSON snapshot the way a host application would hand
//! it over, resolves it against a content index, and checks the derived
//! view numbers a sheet would display.

use primebound_domain::{
    Ability, Armor, ArmorModification, ArmorTrait, ArmorWeightClass, Character, DiceFormula,
    ItemId, Rank, Weapon, WeaponCategory,
};
use primebound_engine::resolve::CompetenceSource;
use primebound_engine::{resolve, resolve_or_minimal, ContentIndex};

const ARMOR_ID: &str = "4f6a2b10-8c3d-4e5f-9a1b-2c3d4e5f6a7b";
const WEAPON_ID: &str = "7c9e2d41-5b6a-4f3c-8d1e-0a9b8c7d6e5f";

/// A level-5 human Bastion with armor, a weapon attack, trained skills,
/// and a full progression record.
fn snapshot() -> String {
    format!(
        r##"{{
  "id": "0b8e7a52-1d1c-4b5e-9a66-3f2d4c8e9a01",
  "name": "Meridian Vale",
  "basic": {{
    "phenotype": "Human",
    "subtype": "Vanguard",
    "background": "Soldier",
    "powerset": "Bastion",
    "primeLevel": 5,
    "size": "Medium"
  }},
  "combat": {{
    "currentHp": 80,
    "initiativeRank": "Apprentice"
  }},
  "skills": {{
    "Athletics": {{ "ability": "Might", "rank": "Apprentice" }}
  }},
  "savingThrows": {{
    "Might": {{ "rank": "Apprentice", "otherBonuses": 1 }}
  }},
  "adjustments": [
    {{ "kind": "resistance", "damageType": "Fire", "value": 5, "source": "Flame Ward" }}
  ],
  "attacks": [
    {{
      "id": "9d1f3e52-6c7b-4a2d-8e0f-1b2c3d4e5f6a",
      "name": "Warhammer",
      "source": {{ "weapon": "{weapon}" }},
      "categories": ["HeavyMelee"],
      "ability": "Might",
      "damage": {{ "diceCount": 2, "dieSize": 6, "modifier": 0 }}
    }}
  ],
  "wounds": [ {{ "location": "Left Arm", "isExtreme": false }} ],
  "gear": [
    {{ "id": "{armor}", "name": "Riot Plate", "kind": "armor", "equipped": true }},
    {{ "id": "{weapon}", "name": "Warhammer", "kind": "weapon", "equipped": true }}
  ],
  "progression": {{
    "levels": {{
      "1": {{
        "phenotype": {{ "name": "Human", "boost": "Wits" }},
        "subtype": {{ "name": "Vanguard", "boost": "Might" }},
        "background": {{ "name": "Soldier", "boost": "Might" }},
        "powerset": "Bastion",
        "abilityBoosts": ["Might", "Agility"],
        "talents": {{
          "bastionTalent": {{ "talent": null, "name": "Shield Wall", "img": "" }}
        }}
      }},
      "2": {{
        "talents": {{
          "humanGenericTalent": {{ "talent": null, "name": "Enhanced Vitality", "img": "" }}
        }}
      }},
      "3": {{
        "abilityImprovements": ["Might", "Endurance"],
        "talents": {{
          "bastionTalent": {{ "talent": null, "name": "Ironbound", "img": "" }}
        }}
      }},
      "4": {{
        "talents": {{
          "humanGenericTalent": {{ "talent": null, "name": "Swift Runner", "img": "" }}
        }}
      }},
      "5": {{
        "abilityImprovements": ["Endurance", "Agility"],
        "talents": {{
          "bastionTalent": {{
            "talent": null,
            "name": "Weapon Training",
            "img": "",
            "weaponCategory": "HeavyMelee",
            "trainingRank": "Competent"
          }}
        }}
      }}
    }}
  }}
}}"##,
        armor = ARMOR_ID,
        weapon = WEAPON_ID,
    )
}

fn content() -> ContentIndex {
    let mut index = ContentIndex::new();

    let mut armor = Armor::new("Riot Plate", ArmorWeightClass::Heavy, 16)
        .with_agility_cap(1)
        .with_might_requirement(3)
        .with_trait(ArmorTrait::Noisy(4))
        .with_modification(ArmorModification::Silenced(2));
    armor.id = id(ARMOR_ID);
    index.add_armor(armor);

    let mut weapon = Weapon::new(
        "Warhammer",
        WeaponCategory::HeavyMelee,
        DiceFormula::parse("2d6").expect("formula"),
    )
    .with_hands(2);
    weapon.id = id(WEAPON_ID);
    index.add_weapon(weapon);

    index
}

fn id(uuid: &str) -> ItemId {
    serde_json::from_value(serde_json::Value::String(uuid.to_string())).expect("valid uuid")
}

fn character() -> Character {
    serde_json::from_str(&snapshot()).expect("snapshot deserializes")
}

#[test]
fn resolves_ability_scores_in_documented_order() {
    let view = resolve(&character(), &content());
    // Wits (phenotype), Might x2 (subtype, background), Endurance (innate),
    // Might + Agility (free boosts), then ASI picks at levels 3 and 5.
    assert_eq!(view.abilities.might, 4);
    assert_eq!(view.abilities.agility, 2);
    assert_eq!(view.abilities.endurance, 3);
    assert_eq!(view.abilities.wits, 1);
    assert_eq!(view.abilities.presence, 0);
}

#[test]
fn resolves_armor_class_with_cap_and_powerset_curve() {
    let view = resolve(&character(), &content());
    // 16 armor base, no untrained penalty (Bastion trains Heavy), Agility
    // capped at 1, +4 powerset bonus at level 5.
    assert_eq!(view.armor_class.value, 21);
}

#[test]
fn resolves_max_hp_with_ironbound_and_enhanced_vitality() {
    let view = resolve(&character(), &content());
    // (14 + 3 * 2) * 5 + 5
    assert_eq!(view.max_hp.value, 105);
}

#[test]
fn resolves_initiative_and_speeds() {
    let view = resolve(&character(), &content());
    assert_eq!(view.initiative.value, 5);
    // Swift Runner, might requirement met.
    assert_eq!(view.speeds.land, 30);
    assert_eq!(view.speeds.swim, None);
    assert_eq!(view.speeds.fly, None);
}

#[test]
fn resolves_skills_including_grants_and_armor_stealth() {
    let view = resolve(&character(), &content());

    let athletics = view.skills.get("Athletics").expect("stored skill");
    assert_eq!(athletics.total, 8);
    assert!(!athletics.synthesized);

    let heavy_armor = view.skills.get("Heavy Armor").expect("powerset grant");
    assert_eq!(heavy_armor.rank, Rank::Apprentice);
    assert!(heavy_armor.locked);
    assert!(heavy_armor.synthesized);
    assert_eq!(heavy_armor.total, 8);

    // Noisy(4) silenced by 2: net -2, Agility 2 cancels it out.
    let stealth = view.skills.get("Stealth").expect("armor-derived row");
    assert!(stealth.synthesized);
    assert_eq!(stealth.other_bonuses, -2);
    assert_eq!(stealth.total, 0);
}

#[test]
fn resolves_all_five_saving_throws() {
    let view = resolve(&character(), &content());
    assert_eq!(view.saving_throws.len(), 5);
    assert_eq!(view.saving_throws[&Ability::Might].total, 9);
    assert_eq!(view.saving_throws[&Ability::Endurance].total, 3);
    assert_eq!(view.saving_throws[&Ability::Presence].total, 0);
}

#[test]
fn resolves_attack_from_weapon_training() {
    let view = resolve(&character(), &content());
    let attack = &view.attacks[0];
    assert_eq!(attack.name, "Warhammer");
    assert_eq!(attack.rank, Rank::Competent);
    assert_eq!(attack.competence_source, CompetenceSource::WeaponTraining);
    assert_eq!(attack.bonus, 12);
    assert_eq!(attack.damage, "2d6+4");
}

#[test]
fn resolves_wound_capacity_and_adjustments() {
    let view = resolve(&character(), &content());
    assert_eq!(view.wound_limit.value, 6);
    assert_eq!(view.wound_load, 1);
    assert_eq!(view.adjustments.len(), 1);
    assert_eq!(view.adjustments[0].damage_type, "Fire");
}

#[test]
fn resolution_is_deterministic_and_read_only() {
    let character = character();
    let index = content();
    let before = character.clone();
    let first = resolve(&character, &index);
    let second = resolve(&character, &index);
    assert_eq!(first, second);
    assert_eq!(character, before);
}

#[test]
fn raw_snapshot_entry_point_matches_direct_resolution() {
    let index = content();
    let from_json = resolve_or_minimal(&snapshot(), &index);
    let direct = resolve(&character(), &index);
    assert_eq!(from_json, direct);
}
