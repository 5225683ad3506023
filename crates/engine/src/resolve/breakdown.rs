//! Auditable stat breakdowns
//!
//! Every derived number on the sheet keeps the ordered list of labeled
//! terms that produced it, so presentation can show "10 base + 3 Agility
//! - 3 untrained" next to the final integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One labeled contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownTerm {
    pub label: String,
    pub value: i32,
}

/// An ordered list of contributions; total is always the sum of terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    terms: Vec<BreakdownTerm>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term, keeping insertion order.
    pub fn push(&mut self, label: impl Into<String>, value: i32) {
        self.terms.push(BreakdownTerm {
            label: label.into(),
            value,
        });
    }

    /// Append a term only when it contributes a nonzero value.
    pub fn push_nonzero(&mut self, label: impl Into<String>, value: i32) {
        if value != 0 {
            self.push(label, value);
        }
    }

    pub fn total(&self) -> i32 {
        self.terms.iter().map(|t| t.value).sum()
    }

    pub fn terms(&self) -> &[BreakdownTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                if term.value < 0 {
                    write!(f, "-{} {}", term.value.abs(), term.label)?;
                } else {
                    write!(f, "{} {}", term.value, term.label)?;
                }
            } else if term.value < 0 {
                write!(f, " - {} {}", term.value.abs(), term.label)?;
            } else {
                write!(f, " + {} {}", term.value, term.label)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_terms_in_order() {
        let mut breakdown = Breakdown::new();
        breakdown.push("base", 10);
        breakdown.push("Agility", 3);
        breakdown.push("untrained", -3);
        assert_eq!(breakdown.total(), 10);
        assert_eq!(breakdown.terms().len(), 3);
    }

    #[test]
    fn test_display_renders_signed_terms() {
        let mut breakdown = Breakdown::new();
        breakdown.push("base", 10);
        breakdown.push("Agility", 3);
        breakdown.push("untrained", -3);
        assert_eq!(breakdown.to_string(), "10 base + 3 Agility - 3 untrained");
    }

    #[test]
    fn test_push_nonzero_skips_empty_terms() {
        let mut breakdown = Breakdown::new();
        breakdown.push_nonzero("status", 0);
        assert!(breakdown.is_empty());
    }
}
