//! Talent catalog entity
//!
//! Talents live in an external compendium and are referenced by id from
//! progression slots. Prerequisites are informational free text; the only
//! program-enforced gate is the minimum prime level.

use serde::{Deserialize, Serialize};

use crate::ids::TalentId;
use crate::value_objects::Powerset;

/// Which powerset family a talent belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TalentFamily {
    #[default]
    Generic,
    Bastion,
    Paragon,
    Marksman,
    Gadgeteer,
}

impl TalentFamily {
    pub fn for_powerset(powerset: Powerset) -> Self {
        match powerset {
            Powerset::Bastion => TalentFamily::Bastion,
            Powerset::Paragon => TalentFamily::Paragon,
            Powerset::Marksman => TalentFamily::Marksman,
            Powerset::Gadgeteer => TalentFamily::Gadgeteer,
        }
    }
}

/// A talent as stored in the external catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talent {
    pub id: TalentId,
    pub name: String,
    pub family: TalentFamily,
    /// Minimum prime level required to select this talent
    pub level: u8,
    /// Free-text prerequisites, shown but not enforced
    #[serde(default)]
    pub prerequisites: String,
    /// Display image path
    #[serde(default)]
    pub img: String,
}

impl Talent {
    pub fn new(name: impl Into<String>, family: TalentFamily, level: u8) -> Self {
        Self {
            id: TalentId::new(),
            name: name.into(),
            family,
            level,
            prerequisites: String::new(),
            img: String::new(),
        }
    }

    pub fn with_prerequisites(mut self, prerequisites: impl Into<String>) -> Self {
        self.prerequisites = prerequisites.into();
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }
}
