//! # Harmony Core
//!
//! Types and the voicing enumerator behind Harmony. Given an abstract chord (a root
//! pitch class plus interval offsets) the enumerator lazily produces every way of
//! spreading it over bass, tenor, alto and soprano within their vocal ranges.
//! Callers narrow the stream with constraint predicates.
//!
//! ## Features
//!
//! - **serde**: Serialize/Deserialize for the value types
//! - **colored**: Colorized terminal rendering of voicings
//!
//! ## Example
//!
//! ```
//! use harmony_core::solver::{inversion_constraint, pinned_voice_constraint};
//! use harmony_core::solver::{ChordEnumerator, VoiceType};
//! use harmony_core::types::Chord;
//!
//! let chord = Chord::parse("G7")?;
//! let soprano = pinned_voice_constraint(VoiceType::Soprano, "F5".parse()?);
//! let first_inversion = inversion_constraint(1);
//!
//! let voicings: Vec<_> = ChordEnumerator::new(chord)
//!     .generate()
//!     .filter(|v| soprano(v) && first_inversion(v))
//!     .take(5)
//!     .collect();
//! assert!(voicings.iter().all(|v| v.bass.to_string().starts_with('B')));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod solver;
pub mod types;

// Re-export commonly used types
pub use solver::{ChordEnumerator, VoiceType};
pub use types::{Chord, ChordQuality, FourPartChord, Note, PitchClass};
