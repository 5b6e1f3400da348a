use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// One of the twelve chromatic pitch classes (0-11)
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchClass(u8);

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// Create a pitch class from its chromatic value, rejecting anything above 11
    pub fn new(value: u8) -> Result<Self> {
        if value > 11 {
            return Err(anyhow!("Pitch class must be 0-11, got {}", value));
        }
        Ok(PitchClass(value))
    }

    /// Reduce any semitone count to its pitch class
    pub fn from_value(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move around the chromatic circle by `semitones`, wrapping mod 12
    pub fn cycled_by(self, semitones: i32) -> Self {
        Self::from_value(self.0 as i32 + semitones)
    }

    /// Parse just the letter and optional accidental.
    ///
    /// Returns the pitch class, the octave carry when the accidental crosses the B/C
    /// boundary (-1 for `Cb`, +1 for `B#`), and how many bytes were used.
    /// Accepts `#`/`s` for sharps and `b` for flats, case-insensitively.
    pub(crate) fn parse_prefix(s: &str) -> Result<(Self, i8, usize)> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| anyhow!("Empty note name"))?
            .to_ascii_uppercase();

        let natural: i32 = match letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(anyhow!("Invalid note name: {}", letter)),
        };

        // A legacy 's' sharp must not swallow the start of a "sus" suffix
        let sus_follows = matches!(chars.clone().nth(1), Some('u') | Some('U'));

        let (semitone, used) = match chars.next() {
            Some('#') => (natural + 1, 2),
            Some('s') | Some('S') if !sus_follows => (natural + 1, 2),
            Some('b') | Some('B') => (natural - 1, 2),
            _ => (natural, 1),
        };

        Ok((
            Self::from_value(semitone),
            semitone.div_euclid(12) as i8,
            used,
        ))
    }
}

impl FromStr for PitchClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (pitch_class, _, used) = Self::parse_prefix(s)?;
        if used != s.len() {
            return Err(anyhow!("Invalid pitch class: {}", s));
        }
        Ok(pitch_class)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SHARP_NAMES[self.0 as usize])
    }
}
