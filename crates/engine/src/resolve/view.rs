//! The derived view - the single read surface for presentation
//!
//! Presentation layers read this object and nothing else; they never
//! re-derive values. The view has no independent lifecycle: it exists only
//! as the output of a resolve step and is rebuilt on every state read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use primebound_domain::{Ability, AbilityScores, DamageAdjustment};

use super::attacks::{AttackView, GadgetView};
use super::breakdown::Breakdown;
use super::combat::{Speeds, BASE_LAND_SPEED, UNARMORED_AC};
use super::skills::{SavingThrowView, SkillView};

/// A derived number plus the audited terms that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStat {
    pub value: i32,
    pub breakdown: Breakdown,
}

impl From<Breakdown> for DerivedStat {
    fn from(breakdown: Breakdown) -> Self {
        Self {
            value: breakdown.total(),
            breakdown,
        }
    }
}

/// Everything the sheet shows, computed in one deterministic pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub abilities: AbilityScores,
    pub ability_breakdowns: BTreeMap<Ability, Breakdown>,
    pub armor_class: DerivedStat,
    pub max_hp: DerivedStat,
    pub initiative: DerivedStat,
    pub speeds: Speeds,
    pub skills: BTreeMap<String, SkillView>,
    pub saving_throws: BTreeMap<Ability, SavingThrowView>,
    pub attacks: Vec<AttackView>,
    pub gadgets: Vec<GadgetView>,
    pub wound_limit: DerivedStat,
    pub wound_load: i32,
    pub adjustments: Vec<DamageAdjustment>,
}

impl DerivedView {
    /// A still-renderable fallback with the documented defaults, used when
    /// a snapshot cannot be resolved at all.
    pub fn minimal() -> Self {
        let mut armor_class = Breakdown::new();
        armor_class.push("base (unarmored)", UNARMORED_AC);
        Self {
            armor_class: armor_class.into(),
            speeds: Speeds {
                land: BASE_LAND_SPEED,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
