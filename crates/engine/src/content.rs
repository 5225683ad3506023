//! Content index - the side table of referenced external entities
//!
//! The host hands the engine a snapshot plus this pre-resolved lookup of
//! talents and items by id. References may be partially absent (deleted
//! compendium entries, unresolved fetches); every lookup returns `Option`
//! and resolvers degrade to the denormalized cache stored next to the
//! reference instead of blocking or failing.

use std::collections::HashMap;

use regex_lite::Regex;

use primebound_domain::{
    Armor, ArmorModification, ArmorTrait, Gadget, ItemId, Talent, TalentId, Weapon,
};

/// Display image used when a talent reference cannot be resolved
pub const PLACEHOLDER_IMG: &str = "icons/unknown.svg";

/// Pre-resolved external entities, keyed by id
#[derive(Debug, Default)]
pub struct ContentIndex {
    talents: HashMap<TalentId, Talent>,
    armors: HashMap<ItemId, Armor>,
    weapons: HashMap<ItemId, Weapon>,
    gadgets: HashMap<ItemId, Gadget>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_talent(&mut self, talent: Talent) -> &mut Self {
        self.talents.insert(talent.id, talent);
        self
    }

    pub fn add_armor(&mut self, armor: Armor) -> &mut Self {
        self.armors.insert(armor.id, armor);
        self
    }

    pub fn add_weapon(&mut self, weapon: Weapon) -> &mut Self {
        self.weapons.insert(weapon.id, weapon);
        self
    }

    pub fn add_gadget(&mut self, gadget: Gadget) -> &mut Self {
        self.gadgets.insert(gadget.id, gadget);
        self
    }

    pub fn talent(&self, id: TalentId) -> Option<&Talent> {
        self.talents.get(&id)
    }

    pub fn armor(&self, id: ItemId) -> Option<&Armor> {
        self.armors.get(&id)
    }

    pub fn weapon(&self, id: ItemId) -> Option<&Weapon> {
        self.weapons.get(&id)
    }

    pub fn gadget(&self, id: ItemId) -> Option<&Gadget> {
        self.gadgets.get(&id)
    }

    /// Talent display name, degrading to the cached name when the reference
    /// is unresolved.
    pub fn talent_name<'a>(&'a self, id: Option<TalentId>, cached: &'a str) -> &'a str {
        match id.and_then(|id| self.talents.get(&id)) {
            Some(talent) => &talent.name,
            None => {
                if let Some(id) = id {
                    tracing::debug!(%id, cached, "talent reference unresolved, using cache");
                }
                cached
            }
        }
    }
}

/// Parse a host trait list like `"Noisy(2), Stealthy(1), Bulky"` into
/// structured armor traits. Unknown traits are preserved verbatim.
pub fn parse_armor_traits(input: &str) -> Vec<ArmorTrait> {
    let valued = valued_trait_regex();
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match valued.captures(part) {
            Some(caps) => {
                let value: i32 = caps[2].parse().unwrap_or(0);
                match caps[1].to_lowercase().as_str() {
                    "noisy" => ArmorTrait::Noisy(value),
                    "stealthy" => ArmorTrait::Stealthy(value),
                    _ => ArmorTrait::Other(part.to_string()),
                }
            }
            None => ArmorTrait::Other(part.to_string()),
        })
        .collect()
}

/// Parse a host modification list like `"Silenced(1), Reinforced"`.
pub fn parse_armor_modifications(input: &str) -> Vec<ArmorModification> {
    let valued = valued_trait_regex();
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match valued.captures(part) {
            Some(caps) if caps[1].eq_ignore_ascii_case("silenced") => {
                ArmorModification::Silenced(caps[2].parse().unwrap_or(0))
            }
            _ => ArmorModification::Other(part.to_string()),
        })
        .collect()
}

fn valued_trait_regex() -> Regex {
    // Name(value), e.g. "Noisy(2)". The pattern is static.
    Regex::new(r"^([A-Za-z ]+)\((\d+)\)$").expect("static trait pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use primebound_domain::TalentFamily;

    #[test]
    fn test_talent_name_falls_back_to_cache() {
        let index = ContentIndex::new();
        let missing = TalentId::new();
        assert_eq!(index.talent_name(Some(missing), "Shield Wall"), "Shield Wall");
        assert_eq!(index.talent_name(None, "Shield Wall"), "Shield Wall");
    }

    #[test]
    fn test_talent_name_prefers_live_reference() {
        let mut index = ContentIndex::new();
        let talent = Talent::new("Ironbound", TalentFamily::Bastion, 1);
        let id = talent.id;
        index.add_talent(talent);
        assert_eq!(index.talent_name(Some(id), "Stale Cache"), "Ironbound");
    }

    #[test]
    fn test_parse_armor_traits() {
        let traits = parse_armor_traits("Noisy(2), Stealthy(1), Bulky");
        assert_eq!(
            traits,
            vec![
                ArmorTrait::Noisy(2),
                ArmorTrait::Stealthy(1),
                ArmorTrait::Other("Bulky".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_armor_modifications() {
        let mods = parse_armor_modifications("Silenced(1), Reinforced");
        assert_eq!(
            mods,
            vec![
                ArmorModification::Silenced(1),
                ArmorModification::Other("Reinforced".to_string()),
            ]
        );
    }
}
