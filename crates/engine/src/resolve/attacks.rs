//! Weapon competence and attack resolution
//!
//! Competence rank resolves in priority order: explicit weapon-training
//! talent (highest rank wins on overlap), powerset innate competence curve,
//! the rank cached on the attack from a previous resolution, then Novice.
//! The final bonus folds in the governing ability, talent bonuses, and the
//! composable status penalty list; terms are breakdown-ordered
//! deterministically with competence before ability.

use serde::{Deserialize, Serialize};

use primebound_domain::{
    attack_penalties, AbilityScores, Attack, Character, DiceFormula, Gadget, GearKind, Rank,
};

use super::breakdown::Breakdown;
use super::talents::TalentCatalogView;

/// Ranged attack bonus granted by Deadeye
pub const DEADEYE: &str = "Deadeye";
const DEADEYE_BONUS: i32 = 5;

/// How a competence rank was found, retained for the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompetenceSource {
    WeaponTraining,
    PowersetInnate,
    CachedRank,
    Default,
}

impl CompetenceSource {
    fn label(&self) -> &'static str {
        match self {
            CompetenceSource::WeaponTraining => "weapon training",
            CompetenceSource::PowersetInnate => "powerset competence",
            CompetenceSource::CachedRank => "cached competence",
            CompetenceSource::Default => "untrained",
        }
    }
}

/// A resolved attack row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackView {
    pub name: String,
    pub rank: Rank,
    pub competence_source: CompetenceSource,
    pub bonus: i32,
    pub breakdown: Breakdown,
    /// The damage formula string handed to the host's roller
    pub damage: String,
}

/// Resolve the competence rank for an attack.
pub fn resolve_competence(
    attack: &Attack,
    character: &Character,
    talents: &TalentCatalogView,
) -> (Rank, CompetenceSource) {
    if let Some(rank) = talents.best_weapon_training(&attack.categories) {
        return (rank, CompetenceSource::WeaponTraining);
    }
    if let Some(profile) = character.profile() {
        let innate = attack
            .categories
            .iter()
            .filter_map(|c| profile.innate_rank_at(*c, character.basic.prime_level))
            .max();
        if let Some(rank) = innate {
            return (rank, CompetenceSource::PowersetInnate);
        }
    }
    if let Some(rank) = attack.cached_rank {
        return (rank, CompetenceSource::CachedRank);
    }
    (Rank::Novice, CompetenceSource::Default)
}

/// Assemble the damage formula: base dice (or the enhanced variant while
/// its talent is active), the signed ability modifier, and any talent bonus
/// dice.
pub fn resolve_damage(
    attack: &Attack,
    scores: &AbilityScores,
    talents: &TalentCatalogView,
) -> String {
    let base: DiceFormula = match (&attack.enhanced_by, attack.enhanced_damage) {
        (Some(talent), Some(enhanced)) if talents.has_talent(talent) => enhanced,
        _ => attack.damage,
    };
    let ability_mod = scores.get(attack.ability);
    let mut formula = base.with_modifier(base.modifier + ability_mod).to_string();
    if let Some(bonus) = &attack.bonus_damage {
        if talents.has_talent(&bonus.talent) {
            formula.push_str(&format!(" + {}", bonus.dice));
        }
    }
    formula
}

/// Resolve one attack into its view row.
pub fn resolve_attack(
    attack: &Attack,
    character: &Character,
    scores: &AbilityScores,
    talents: &TalentCatalogView,
) -> AttackView {
    let (rank, source) = resolve_competence(attack, character, talents);
    let ranged = attack.is_ranged();

    let mut breakdown = Breakdown::new();
    breakdown.push_nonzero("base", attack.base_bonus);
    // Competence always precedes the ability term.
    breakdown.push(format!("{} ({})", source.label(), rank), rank.bonus());
    breakdown.push(attack.ability.display_name(), scores.get(attack.ability));
    if ranged && talents.has_talent(DEADEYE) {
        breakdown.push(DEADEYE, DEADEYE_BONUS);
    }
    for penalty in attack_penalties(&character.combat.statuses, ranged) {
        breakdown.push(penalty.source.display_name(), penalty.value);
    }

    AttackView {
        name: attack.name.clone(),
        rank,
        competence_source: source,
        bonus: breakdown.total(),
        breakdown,
        damage: resolve_damage(attack, scores, talents),
    }
}

/// A gadget formula row: emitted verbatim, with no competence folding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetView {
    pub name: String,
    pub damage: Option<String>,
    pub healing: Option<String>,
}

impl GadgetView {
    fn from_gadget(gadget: &Gadget) -> Self {
        Self {
            name: gadget.name.clone(),
            damage: gadget.damage.map(|d| d.to_string()),
            healing: gadget.healing.map(|h| h.to_string()),
        }
    }
}

/// Resolve the equipped gadget formula rows.
pub fn resolve_gadgets(
    character: &Character,
    index: &crate::content::ContentIndex,
) -> Vec<GadgetView> {
    character
        .gear
        .iter()
        .filter(|g| g.kind == GearKind::Gadget && g.equipped)
        .filter_map(|g| match index.gadget(g.id) {
            Some(gadget) => Some(GadgetView::from_gadget(gadget)),
            None => {
                tracing::debug!(id = %g.id, cached = %g.name, "gadget reference unresolved");
                Some(GadgetView {
                    name: g.name.clone(),
                    damage: None,
                    healing: None,
                })
            }
        })
        .collect()
}
