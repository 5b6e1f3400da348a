use crate::types::chord::Chord;
use crate::types::note::Note;
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

/// An abstract chord realized with one concrete note in each of the four voices
///
/// No ordering between voices is enforced; a tenor may sit above the alto.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourPartChord {
    pub chord: Chord,
    pub bass: Note,
    pub tenor: Note,
    pub alto: Note,
    pub soprano: Note,
}

impl FourPartChord {
    pub fn new(chord: Chord, bass: Note, tenor: Note, alto: Note, soprano: Note) -> Self {
        FourPartChord {
            chord,
            bass,
            tenor,
            alto,
            soprano,
        }
    }

    /// Notes from the bottom voice up: bass, tenor, alto, soprano
    pub fn notes(&self) -> [Note; 4] {
        [self.bass, self.tenor, self.alto, self.soprano]
    }

    /// Whether every voice sounds a member of the chord
    pub fn is_complete_realization(&self) -> bool {
        self.notes()
            .iter()
            .all(|note| self.chord.contains(note.pitch_class()))
    }

    /// Colorized single-line rendering for terminals
    #[cfg(feature = "colored")]
    pub fn colored_string(&self) -> String {
        format!(
            "{} {} {} {}",
            format!("B:{:<4}", self.bass.to_string()).blue(),
            format!("T:{:<4}", self.tenor.to_string()).green(),
            format!("A:{:<4}", self.alto.to_string()).yellow(),
            format!("S:{}", self.soprano).magenta(),
        )
    }
}

impl fmt::Display for FourPartChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B:{} T:{} A:{} S:{}",
            self.bass, self.tenor, self.alto, self.soprano
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pitch_class::PitchClass;

    fn voicing(notes: [&str; 4]) -> FourPartChord {
        let [b, t, a, s] = notes.map(|n| n.parse::<Note>().unwrap());
        FourPartChord::new(Chord::major(PitchClass::C), b, t, a, s)
    }

    #[test]
    fn test_notes_bottom_up() {
        let chord = voicing(["C3", "G3", "E4", "C5"]);
        assert_eq!(chord.notes()[0], chord.bass);
        assert_eq!(chord.notes()[3], chord.soprano);
    }

    #[test]
    fn test_complete_realization() {
        assert!(voicing(["C3", "G3", "E4", "C5"]).is_complete_realization());
        assert!(!voicing(["C3", "G3", "F4", "C5"]).is_complete_realization());
    }

    #[test]
    fn test_display() {
        let chord = voicing(["E3", "C4", "G4", "C5"]);
        assert_eq!(chord.to_string(), "B:E3 T:C4 A:G4 S:C5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let chord = voicing(["E3", "C4", "G4", "C5"]);
        let json = serde_json::to_string(&chord).unwrap();
        let back: FourPartChord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chord);
    }
}
