use crate::types::pitch_class::PitchClass;
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Chord qualities that can be named by a symbol suffix (`m`, `7`, `dim`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Dominant7,
    Major7,
    Minor7,
    Diminished7,
    HalfDiminished7,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 11] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
        ChordQuality::Dominant7,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Diminished7,
        ChordQuality::HalfDiminished7,
    ];

    /// Semitone offsets from the root, in inversion order
    pub fn offsets(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
        }
    }

    /// Canonical suffix used when printing a chord symbol
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::HalfDiminished7 => "m7b5",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let quality = match suffix {
            "" | "maj" | "M" => ChordQuality::Major,
            "m" | "min" | "-" => ChordQuality::Minor,
            "dim" | "o" => ChordQuality::Diminished,
            "aug" | "+" => ChordQuality::Augmented,
            "sus2" => ChordQuality::Sus2,
            "sus4" | "sus" => ChordQuality::Sus4,
            "7" | "dom7" => ChordQuality::Dominant7,
            "maj7" | "M7" => ChordQuality::Major7,
            "m7" | "min7" | "-7" => ChordQuality::Minor7,
            "dim7" | "o7" => ChordQuality::Diminished7,
            "m7b5" | "ø" | "ø7" => ChordQuality::HalfDiminished7,
            _ => return None,
        };
        Some(quality)
    }
}

/// An abstract chord: a root pitch class plus semitone offsets from that root
///
/// The offsets keep the order they were given in, which is what inversion indices
/// refer to (0 = root position, 1 = first inversion, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    root: PitchClass,
    offsets: Vec<u8>,
}

impl Chord {
    pub fn new(root: PitchClass, offsets: Vec<u8>) -> Self {
        Chord { root, offsets }
    }

    pub fn from_quality(root: PitchClass, quality: ChordQuality) -> Self {
        Chord::new(root, quality.offsets().to_vec())
    }

    pub fn major(root: PitchClass) -> Self {
        Chord::from_quality(root, ChordQuality::Major)
    }

    pub fn minor(root: PitchClass) -> Self {
        Chord::from_quality(root, ChordQuality::Minor)
    }

    /// Parse a chord symbol such as `C`, `F#m7` or `Bbdim`
    pub fn parse(symbol: &str) -> Result<Self> {
        symbol.parse()
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn offsets(&self) -> &[u8] {
        &self.offsets
    }

    /// Pitch class of the chord member at `index` in offset order
    pub fn member(&self, index: usize) -> Option<PitchClass> {
        self.offsets
            .get(index)
            .map(|&offset| self.root.cycled_by(offset as i32))
    }

    /// Chord members in offset order (duplicates kept)
    pub fn members(&self) -> Vec<PitchClass> {
        self.offsets
            .iter()
            .map(|&offset| self.root.cycled_by(offset as i32))
            .collect()
    }

    /// Set of pitch classes belonging to the chord
    pub fn pitch_classes(&self) -> BTreeSet<PitchClass> {
        self.members().into_iter().collect()
    }

    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.offsets
            .iter()
            .any(|&offset| self.root.cycled_by(offset as i32) == pitch_class)
    }

    /// Named quality if the offsets match one exactly
    pub fn quality(&self) -> Option<ChordQuality> {
        ChordQuality::ALL
            .into_iter()
            .find(|quality| quality.offsets() == self.offsets.as_slice())
    }

    /// Chord symbol, or the root with its offsets when the quality has no name
    pub fn symbol(&self) -> String {
        match self.quality() {
            Some(quality) => format!("{}{}", self.root, quality.suffix()),
            None => format!("{}{:?}", self.root, self.offsets),
        }
    }
}

impl FromStr for Chord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (root, _, used) = PitchClass::parse_prefix(s)?;
        let suffix = &s[used..];
        let quality = ChordQuality::from_suffix(suffix)
            .ok_or_else(|| anyhow!("Unknown chord quality '{}' in '{}'", suffix, s))?;
        Ok(Chord::from_quality(root, quality))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members().iter().map(|pc| pc.to_string()).collect();
        write!(f, "{}: [{}]", self.symbol(), members.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let c_major = Chord::major(PitchClass::C);
        assert!(c_major.contains(PitchClass::C));
        assert!(c_major.contains(PitchClass::E));
        assert!(c_major.contains(PitchClass::G));
        assert!(!c_major.contains(PitchClass::F));
        assert_eq!(c_major.pitch_classes().len(), 3);
    }

    #[test]
    fn test_membership_wraps_past_b() {
        let a_major = Chord::major(PitchClass::A);
        assert_eq!(
            a_major.members(),
            vec![PitchClass::A, PitchClass::C_SHARP, PitchClass::E]
        );
        assert!(a_major.contains(PitchClass::C_SHARP));
        assert!(!a_major.contains(PitchClass::C));
    }

    #[test]
    fn test_member_by_index() {
        let g7 = Chord::from_quality(PitchClass::G, ChordQuality::Dominant7);
        assert_eq!(g7.member(0), Some(PitchClass::G));
        assert_eq!(g7.member(3), Some(PitchClass::F));
        assert_eq!(g7.member(4), None);
    }

    #[test]
    fn test_symbol_parsing() {
        let fsm7 = Chord::parse("F#m7").unwrap();
        assert_eq!(fsm7.root(), PitchClass::F_SHARP);
        assert_eq!(fsm7.offsets(), &[0, 3, 7, 10]);

        let bb = Chord::parse("Bb").unwrap();
        assert_eq!(bb, Chord::major(PitchClass::A_SHARP));

        let csus4 = Chord::parse("Csus4").unwrap();
        assert_eq!(csus4.root(), PitchClass::C);
        assert_eq!(csus4.quality(), Some(ChordQuality::Sus4));

        assert!(Chord::parse("Cwhatever").is_err());
        assert!(Chord::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Chord::major(PitchClass::C).to_string(), "C: [C, E, G]");
        assert_eq!(Chord::parse("Am").unwrap().to_string(), "Am: [A, C, E]");
        let custom = Chord::new(PitchClass::D, vec![0, 5]);
        assert_eq!(custom.symbol(), "D[0, 5]");
    }
}
