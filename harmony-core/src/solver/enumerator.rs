//! Enumeration of every four-voice realization of an abstract chord.

use crate::solver::product::CartesianProduct;
use crate::solver::voice::VoiceType;
use crate::types::{Chord, FourPartChord, Note, PitchClass};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Produces every voicing of a chord within the four voice ranges.
///
/// Each call to [`generate`](Self::generate) starts an independent single pass.
/// Without randomization the voicings come out in ascending pitch order with the bass
/// varying slowest and the soprano fastest.
///
/// # Example
///
/// ```
/// use harmony_core::solver::ChordEnumerator;
/// use harmony_core::types::{Chord, PitchClass};
///
/// let enumerator = ChordEnumerator::new(Chord::major(PitchClass::C));
/// let first = enumerator.generate().next().unwrap();
/// assert_eq!(first.to_string(), "B:E3 T:C4 A:G4 S:C5");
/// assert_eq!(enumerator.combination_count(), 1080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordEnumerator {
    chord: Chord,
    randomize: bool,
    seed: Option<u64>,
}

impl ChordEnumerator {
    pub fn new(chord: Chord) -> Self {
        ChordEnumerator {
            chord,
            randomize: false,
            seed: None,
        }
    }

    /// Enumerator that shuffles each voice's candidates before combining them
    pub fn randomized(chord: Chord) -> Self {
        Self::new(chord).with_randomize(true)
    }

    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Fix the shuffle seed so randomized passes are reproducible.
    ///
    /// Has no effect unless randomization is on.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    pub fn is_randomized(&self) -> bool {
        self.randomize
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Notes the voice can sing that belong to the chord, ascending
    pub fn notes_in_range(&self, voice: VoiceType) -> Vec<Note> {
        Self::candidates(&self.chord.pitch_classes(), voice)
    }

    fn candidates(members: &BTreeSet<PitchClass>, voice: VoiceType) -> Vec<Note> {
        voice
            .range()
            .filter(|&value| members.contains(&PitchClass::from_value(value as i32)))
            .filter_map(Note::from_absolute)
            .collect()
    }

    /// Total voicings a pass yields, without enumerating them
    pub fn combination_count(&self) -> usize {
        VoiceType::ALL
            .iter()
            .map(|&voice| self.notes_in_range(voice).len())
            .product()
    }

    /// Start a pass, seeding any shuffle from the configured seed or the OS
    pub fn generate(&self) -> Voicings {
        if !self.randomize {
            return self.build(None::<&mut StdRng>);
        }

        let mut rng = match self.seed {
            Some(seed) => {
                trace!(seed, "shuffling voicings with fixed seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        self.build(Some(&mut rng))
    }

    /// Start a pass, drawing any shuffle from `rng` instead of a fresh generator
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Voicings {
        if self.randomize {
            self.build(Some(rng))
        } else {
            self.build(None::<&mut R>)
        }
    }

    fn build<R: Rng + ?Sized>(&self, rng: Option<&mut R>) -> Voicings {
        // Membership depends only on pitch class, so one set serves every voice
        let members = self.chord.pitch_classes();
        let mut axes: Vec<Vec<Note>> = VoiceType::ALL
            .iter()
            .map(|&voice| Self::candidates(&members, voice))
            .collect();

        if let Some(rng) = rng {
            for axis in &mut axes {
                axis.shuffle(rng);
            }
        }

        let product = CartesianProduct::new(axes);
        debug!(
            chord = %self.chord.symbol(),
            bass = product_axis_len(&product, VoiceType::Bass),
            tenor = product_axis_len(&product, VoiceType::Tenor),
            alto = product_axis_len(&product, VoiceType::Alto),
            soprano = product_axis_len(&product, VoiceType::Soprano),
            total = product.len(),
            randomize = self.randomize,
            "starting voicing enumeration"
        );

        Voicings {
            chord: self.chord.clone(),
            product,
        }
    }
}

fn product_axis_len(product: &CartesianProduct<Note>, voice: VoiceType) -> usize {
    product.axis(voice.index()).map_or(0, <[Note]>::len)
}

impl<'a> IntoIterator for &'a ChordEnumerator {
    type Item = FourPartChord;
    type IntoIter = Voicings;

    fn into_iter(self) -> Self::IntoIter {
        self.generate()
    }
}

/// One forward-only pass over a chord's voicings
#[derive(Debug, Clone)]
pub struct Voicings {
    chord: Chord,
    product: CartesianProduct<Note>,
}

impl Iterator for Voicings {
    type Item = FourPartChord;

    fn next(&mut self) -> Option<Self::Item> {
        let notes = self.product.next()?;
        Some(FourPartChord::new(
            self.chord.clone(),
            notes[VoiceType::Bass.index()],
            notes[VoiceType::Tenor.index()],
            notes[VoiceType::Alto.index()],
            notes[VoiceType::Soprano.index()],
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.product.size_hint()
    }
}

impl ExactSizeIterator for Voicings {}

impl FusedIterator for Voicings {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::constraint::{inversion_constraint, pinned_voice_constraint};
    use crate::types::ChordQuality;
    use std::collections::HashSet;

    fn notes(names: &[&str]) -> Vec<Note> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    fn c_major() -> ChordEnumerator {
        ChordEnumerator::new(Chord::major(PitchClass::C))
    }

    #[test]
    fn test_notes_in_range_c_major() {
        let enumerator = c_major();
        assert_eq!(
            enumerator.notes_in_range(VoiceType::Bass),
            notes(&["E3", "G3", "C4", "E4", "G4", "C5"])
        );
        assert_eq!(
            enumerator.notes_in_range(VoiceType::Tenor),
            notes(&["C4", "E4", "G4", "C5", "E5", "G5"])
        );
        assert_eq!(
            enumerator.notes_in_range(VoiceType::Alto),
            notes(&["G4", "C5", "E5", "G5", "C6"])
        );
        assert_eq!(
            enumerator.notes_in_range(VoiceType::Soprano),
            notes(&["C5", "E5", "G5", "C6", "E6", "G6"])
        );
    }

    #[test]
    fn test_count_is_product_of_candidates() {
        let enumerator = c_major();
        assert_eq!(enumerator.combination_count(), 6 * 6 * 5 * 6);
        assert_eq!(enumerator.generate().len(), 1080);
        assert_eq!(enumerator.generate().count(), 1080);
    }

    #[test]
    fn test_first_and_last_voicings() {
        let all: Vec<FourPartChord> = c_major().generate().collect();
        assert_eq!(all.first().unwrap().to_string(), "B:E3 T:C4 A:G4 S:C5");
        assert_eq!(all[1].to_string(), "B:E3 T:C4 A:G4 S:E5");
        assert_eq!(all.last().unwrap().to_string(), "B:C5 T:G5 A:C6 S:G6");
    }

    #[test]
    fn test_ordered_pass_is_strictly_lexicographic() {
        let keys: Vec<[i16; 4]> = c_major()
            .generate()
            .map(|chord| chord.notes().map(|note| note.absolute_value()))
            .collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_every_voice_is_a_member() {
        let chord = Chord::from_quality(PitchClass::D, ChordQuality::Dominant7);
        let members = chord.pitch_classes();
        for voicing in ChordEnumerator::new(chord).generate() {
            for note in voicing.notes() {
                assert!(members.contains(&note.pitch_class()));
            }
        }
    }

    #[test]
    fn test_randomized_pass_is_a_permutation() {
        let ordered: HashSet<FourPartChord> = c_major().generate().collect();
        let shuffled: Vec<FourPartChord> = c_major()
            .with_randomize(true)
            .with_seed(7)
            .generate()
            .collect();

        assert_eq!(shuffled.len(), ordered.len());
        let shuffled_set: HashSet<FourPartChord> = shuffled.iter().cloned().collect();
        assert_eq!(shuffled_set, ordered);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let enumerator = ChordEnumerator::randomized(Chord::major(PitchClass::G)).with_seed(42);
        let first: Vec<FourPartChord> = enumerator.generate().take(50).collect();
        let second: Vec<FourPartChord> = enumerator.generate().take(50).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_without_randomize_keeps_order() {
        let plain: Vec<FourPartChord> = c_major().generate().take(20).collect();
        let seeded: Vec<FourPartChord> = c_major().with_seed(3).generate().take(20).collect();
        assert_eq!(plain, seeded);
    }

    #[test]
    fn test_generate_with_rng() {
        let enumerator = ChordEnumerator::randomized(Chord::minor(PitchClass::A));
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);
        let a: Vec<FourPartChord> = enumerator.generate_with_rng(&mut rng_a).collect();
        let b: Vec<FourPartChord> = enumerator.generate_with_rng(&mut rng_b).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), enumerator.combination_count());
    }

    #[test]
    fn test_pinned_voice_filter_count() {
        let enumerator = c_major();
        let e5: Note = "E5".parse().unwrap();
        let pinned = pinned_voice_constraint(VoiceType::Soprano, e5);
        let matches: Vec<FourPartChord> = enumerator.generate().filter(|c| pinned(c)).collect();

        assert_eq!(matches.len(), 1080 / 6);
        assert!(matches.iter().all(|c| c.soprano == e5));
    }

    #[test]
    fn test_pinned_voice_out_of_range_matches_nothing() {
        let pinned = pinned_voice_constraint(VoiceType::Bass, "C2".parse().unwrap());
        assert_eq!(c_major().generate().filter(|c| pinned(c)).count(), 0);

        let not_member = pinned_voice_constraint(VoiceType::Bass, "D4".parse().unwrap());
        assert_eq!(c_major().generate().filter(|c| not_member(c)).count(), 0);
    }

    #[test]
    fn test_root_position_filter() {
        let root_position = inversion_constraint(0);
        let matches: Vec<FourPartChord> = c_major()
            .generate()
            .filter(|c| root_position(c))
            .collect();
        // Bass candidates C4 and C5 out of six
        assert_eq!(matches.len(), 2 * 6 * 5 * 6);
        assert!(matches.iter().all(|c| c.bass.pitch_class() == PitchClass::C));
    }

    #[test]
    fn test_into_iterator_starts_fresh_pass() {
        let enumerator = c_major();
        let mut count = 0;
        for _ in &enumerator {
            count += 1;
        }
        assert_eq!(count, (&enumerator).into_iter().count());
    }

    #[test]
    fn test_unvoiceable_chord_is_empty() {
        // An empty interval set has no members in any range
        let enumerator = ChordEnumerator::new(Chord::new(PitchClass::C, Vec::new()));
        assert_eq!(enumerator.combination_count(), 0);
        assert_eq!(enumerator.generate().next(), None);
    }
}
