use crate::types::pitch_class::PitchClass;
use anyhow::{anyhow, Result};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// A pitched note: pitch class plus octave in scientific pitch notation (4 = middle C)
///
/// Every note maps to a single absolute value, `octave * 12 + pitch_class`, so C0 is 0
/// and C4 is 48. Equality and ordering follow that absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    // Field order matters: the derived Ord compares octave first
    octave: i8,
    pitch_class: PitchClass,
}

impl Note {
    pub fn new(pitch_class: PitchClass, octave: i8) -> Self {
        Note {
            octave,
            pitch_class,
        }
    }

    /// Rebuild a note from its absolute value, or `None` when the octave does not fit
    /// in an `i8` (valid values are -1536..=1535)
    pub fn from_absolute(value: i16) -> Option<Self> {
        let octave = i8::try_from(value.div_euclid(12)).ok()?;
        Some(Note {
            octave,
            pitch_class: PitchClass::from_value(value as i32),
        })
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Semitones above C0
    pub fn absolute_value(&self) -> i16 {
        self.octave as i16 * 12 + self.pitch_class.value() as i16
    }

    /// Transpose the note by a number of semitones, carrying into the octave
    pub fn transpose(self, semitones: i16) -> Option<Note> {
        self.absolute_value()
            .checked_add(semitones)
            .and_then(Note::from_absolute)
    }
}

impl FromStr for Note {
    type Err = anyhow::Error;

    /// Parse `E3`, `Bb4`, `F#`, `G-1`; a missing octave means octave 4
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (pitch_class, carry, used) = PitchClass::parse_prefix(s)?;
        let octave_part = &s[used..];

        let octave = if octave_part.is_empty() {
            4
        } else {
            octave_part
                .parse::<i8>()
                .map_err(|_| anyhow!("Invalid octave: {}", octave_part))?
        };

        // Cb4 sounds as B3 and B#4 as C5
        let octave = octave
            .checked_add(carry)
            .ok_or_else(|| anyhow!("Octave out of range: {}", s))?;

        Ok(Note::new(pitch_class, octave))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

// Signed distance in semitones
impl Sub<Note> for Note {
    type Output = i16;

    fn sub(self, other: Note) -> Self::Output {
        self.absolute_value() - other.absolute_value()
    }
}
