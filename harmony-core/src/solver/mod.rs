//! Voicing enumeration: voice ranges, constraints and the chord enumerator.

pub mod constraint;
pub mod enumerator;
pub mod product;
pub mod voice;

pub use constraint::{
    checked_inversion_constraint, inversion_constraint, pinned_voice_constraint, Constraint,
    ConstraintSet,
};
pub use enumerator::{ChordEnumerator, Voicings};
pub use product::CartesianProduct;
pub use voice::VoiceType;
