//! Predicates over realized chords, used to filter enumerated voicings.

use crate::solver::voice::VoiceType;
use crate::types::{Chord, FourPartChord, Note};
use anyhow::{bail, Result};

/// A pure test over a realized chord
pub trait Constraint {
    fn is_satisfied(&self, chord: &FourPartChord) -> bool;
}

impl<F> Constraint for F
where
    F: Fn(&FourPartChord) -> bool,
{
    fn is_satisfied(&self, chord: &FourPartChord) -> bool {
        self(chord)
    }
}

/// Holds only when `voice` sings exactly `note` (same octave)
pub fn pinned_voice_constraint(
    voice: VoiceType,
    note: Note,
) -> impl Fn(&FourPartChord) -> bool + Clone {
    move |chord| voice.note_for(chord) == note
}

/// Holds when the bass sounds the chord member at `inversion` in offset order.
///
/// # Panics
///
/// The returned predicate panics with an index-out-of-range error when `inversion`
/// is not a valid index into the offsets of the chord it is applied to. Use
/// [`checked_inversion_constraint`] to validate against a known chord up front.
pub fn inversion_constraint(inversion: usize) -> impl Fn(&FourPartChord) -> bool + Clone {
    move |chord| {
        let offset = chord.chord.offsets()[inversion];
        chord.chord.root().cycled_by(offset as i32) == chord.bass.pitch_class()
    }
}

/// Like [`inversion_constraint`], but rejects an index that `chord` has no member for.
pub fn checked_inversion_constraint(
    chord: &Chord,
    inversion: usize,
) -> Result<impl Fn(&FourPartChord) -> bool + Clone> {
    let members = chord.offsets().len();
    if inversion >= members {
        bail!(
            "Inversion {} out of range: {} has {} members (valid: 0-{})",
            inversion,
            chord.symbol(),
            members,
            members.saturating_sub(1)
        );
    }
    Ok(inversion_constraint(inversion))
}

/// A conjunction of constraints, each with a short description for display
#[derive(Default)]
pub struct ConstraintSet {
    entries: Vec<(String, Box<dyn Constraint>)>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<C>(&mut self, description: impl Into<String>, constraint: C)
    where
        C: Constraint + 'static,
    {
        self.entries.push((description.into(), Box::new(constraint)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(description, _)| description.as_str())
    }
}

impl Constraint for ConstraintSet {
    /// True when every member holds; an empty set accepts everything
    fn is_satisfied(&self, chord: &FourPartChord) -> bool {
        self.entries
            .iter()
            .all(|(_, constraint)| constraint.is_satisfied(chord))
    }
}
