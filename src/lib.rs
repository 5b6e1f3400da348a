//! # Harmony
//!
//! Harmony lists the four-part (SATB) voicings of a chord. The enumeration engine
//! lives in `harmony-core`; this crate wraps it in an interactive REPL where a chord
//! is chosen by symbol, constraints are stacked on top, and matching voicings are
//! printed bass to soprano.
//!
//! ## Modules
//!
//! - `commands`: The command registry and the handlers behind each REPL command.
//! - `repl`: The Read-Eval-Print Loop itself.
//! - `session`: Per-REPL state (current chord, constraints, enumeration options).

pub mod commands;
pub mod repl;
pub mod session;

// Re-export commonly used types and functions for convenience
pub use harmony_core::solver::{ChordEnumerator, VoiceType};
pub use harmony_core::types::{Chord, FourPartChord, Note, PitchClass};
pub use session::Session;
