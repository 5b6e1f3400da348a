// harmony-core/src/types/mod.rs

pub mod chord;
pub mod four_part_chord;
pub mod note;
pub mod pitch_class;

pub use chord::{Chord, ChordQuality};
pub use four_part_chord::FourPartChord;
pub use note::Note;
pub use pitch_class::PitchClass;
