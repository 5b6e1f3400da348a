//! The four voices of a chorale texture and their ranges.

use crate::types::{FourPartChord, Note, PitchClass};
use anyhow::{anyhow, Result};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceType {
    Bass,
    Tenor,
    Alto,
    Soprano,
}

impl VoiceType {
    /// Bottom to top; this is also the nesting order of enumeration (bass outermost)
    pub const ALL: [VoiceType; 4] = [
        VoiceType::Bass,
        VoiceType::Tenor,
        VoiceType::Alto,
        VoiceType::Soprano,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowest and highest note the voice may sing.
    ///
    /// Neighbouring ranges overlap so tenor and alto can share a register.
    pub fn bounds(self) -> (Note, Note) {
        match self {
            VoiceType::Bass => (Note::new(PitchClass::E, 3), Note::new(PitchClass::C, 5)),
            VoiceType::Tenor => (Note::new(PitchClass::C, 4), Note::new(PitchClass::G, 5)),
            VoiceType::Alto => (Note::new(PitchClass::G, 4), Note::new(PitchClass::C, 6)),
            VoiceType::Soprano => (Note::new(PitchClass::C, 5), Note::new(PitchClass::G, 6)),
        }
    }

    /// Inclusive range of absolute pitch values the voice may sing
    pub fn range(self) -> RangeInclusive<i16> {
        let (low, high) = self.bounds();
        low.absolute_value()..=high.absolute_value()
    }

    pub fn note_for(self, chord: &FourPartChord) -> Note {
        match self {
            VoiceType::Bass => chord.bass,
            VoiceType::Tenor => chord.tenor,
            VoiceType::Alto => chord.alto,
            VoiceType::Soprano => chord.soprano,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VoiceType::Bass => "bass",
            VoiceType::Tenor => "tenor",
            VoiceType::Alto => "alto",
            VoiceType::Soprano => "soprano",
        }
    }
}

impl FromStr for VoiceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" | "bass" => Ok(VoiceType::Bass),
            "t" | "tenor" => Ok(VoiceType::Tenor),
            "a" | "alto" => Ok(VoiceType::Alto),
            "s" | "soprano" => Ok(VoiceType::Soprano),
            other => Err(anyhow!("Unknown voice: {}", other)),
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
