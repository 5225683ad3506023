//! Primebound resolution engine
//!
//! Takes a character snapshot plus a content index and derives the full
//! read surface of the sheet: ability scores, armor class, hit points,
//! speeds, skills, saving throws, attacks, and wound capacity. Resolution
//! never mutates the snapshot; the few persisted mirrors of derived values
//! (max HP) are written back only through explicit `ops` calls.

pub mod content;
pub mod ops;
pub mod progression;
pub mod resolve;

pub use content::ContentIndex;
pub use progression::ProgressionGate;
pub use resolve::{resolve, resolve_or_minimal, DerivedView};
