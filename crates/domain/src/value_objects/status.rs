//! Status effects and their composable penalties
//!
//! Penalties are modeled as a list of modifier records built in a fixed
//! order (the declaration order of [`StatusEffect::ALL`]) so every
//! computation site applies them identically. Each penalty is additive and
//! independently toggled; none are mutually exclusive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An active condition on the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusEffect {
    Stunned,
    Paralyzed,
    OffBalance,
    Scared,
    Prone,
    Fatigued,
    Blinded,
    Climbing,
    Flying,
}

impl StatusEffect {
    /// Canonical application order for penalty composition
    pub const ALL: [StatusEffect; 9] = [
        StatusEffect::Stunned,
        StatusEffect::Paralyzed,
        StatusEffect::OffBalance,
        StatusEffect::Scared,
        StatusEffect::Prone,
        StatusEffect::Fatigued,
        StatusEffect::Blinded,
        StatusEffect::Climbing,
        StatusEffect::Flying,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusEffect::Stunned => "Stunned",
            StatusEffect::Paralyzed => "Paralyzed",
            StatusEffect::OffBalance => "Off-Balance",
            StatusEffect::Scared => "Scared",
            StatusEffect::Prone => "Prone",
            StatusEffect::Fatigued => "Fatigued",
            StatusEffect::Blinded => "Blinded",
            StatusEffect::Climbing => "Climbing",
            StatusEffect::Flying => "Flying",
        }
    }

    /// Attack-roll penalty magnitude while this status is active.
    ///
    /// Climbing and Flying only penalize ranged attacks.
    pub fn attack_penalty(&self, ranged: bool) -> i32 {
        match self {
            StatusEffect::Scared => 2,
            StatusEffect::Prone => 2,
            StatusEffect::Fatigued => 2,
            StatusEffect::Blinded => 5,
            StatusEffect::Climbing | StatusEffect::Flying if ranged => 5,
            _ => 0,
        }
    }

    /// Whether this status zeroes the agility contribution to AC.
    pub fn negates_agility(&self) -> bool {
        matches!(self, StatusEffect::Stunned | StatusEffect::Paralyzed)
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One applied penalty, retained for breakdown display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusModifier {
    pub source: StatusEffect,
    pub value: i32,
}

/// Build the attack penalty list for the active statuses, in canonical order.
pub fn attack_penalties(active: &[StatusEffect], ranged: bool) -> Vec<StatusModifier> {
    StatusEffect::ALL
        .iter()
        .filter(|status| active.contains(status))
        .filter_map(|status| {
            let penalty = status.attack_penalty(ranged);
            (penalty != 0).then_some(StatusModifier {
                source: *status,
                value: -penalty,
            })
        })
        .collect()
}
