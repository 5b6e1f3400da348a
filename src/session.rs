//! Per-REPL settings: the chord being voiced, active constraints and enumeration options.

use harmony_core::solver::{ChordEnumerator, ConstraintSet};
use harmony_core::types::Chord;

/// Voicings printed by `list` unless changed with `limit`
pub const DEFAULT_LIMIT: usize = 20;

pub struct Session {
    chord: Option<Chord>,
    constraints: ConstraintSet,
    pub randomize: bool,
    pub seed: Option<u64>,
    pub limit: usize,
}

impl Session {
    pub fn new() -> Self {
        Session {
            chord: None,
            constraints: ConstraintSet::new(),
            randomize: false,
            seed: None,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn chord(&self) -> Option<&Chord> {
        self.chord.as_ref()
    }

    /// Switch to a new chord; constraints written for the old one are dropped
    pub fn set_chord(&mut self, chord: Chord) {
        self.chord = Some(chord);
        self.constraints.clear();
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut ConstraintSet {
        &mut self.constraints
    }

    /// Enumerator for the current chord with the session's shuffle options
    pub fn enumerator(&self) -> Option<ChordEnumerator> {
        let chord = self.chord.clone()?;
        let enumerator = ChordEnumerator::new(chord).with_randomize(self.randomize);
        Some(match self.seed {
            Some(seed) => enumerator.with_seed(seed),
            None => enumerator,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmony_core::solver::inversion_constraint;

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert!(session.chord().is_none());
        assert!(session.enumerator().is_none());
        assert_eq!(session.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_new_chord_clears_constraints() {
        let mut session = Session::new();
        session.set_chord(Chord::parse("C").unwrap());
        session
            .constraints_mut()
            .push("root position", inversion_constraint(0));
        assert_eq!(session.constraints().len(), 1);

        session.set_chord(Chord::parse("Dm").unwrap());
        assert!(session.constraints().is_empty());
    }

    #[test]
    fn test_enumerator_carries_options() {
        let mut session = Session::new();
        session.set_chord(Chord::parse("E7").unwrap());
        session.randomize = true;
        session.seed = Some(9);

        let enumerator = session.enumerator().unwrap();
        assert!(enumerator.is_randomized());
        assert_eq!(enumerator.seed(), Some(9));
        assert_eq!(enumerator.chord().symbol(), "E7");
    }
}
