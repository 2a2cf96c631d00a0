//! Key membership and scale-degree resolution.
//!
//! A key is a mode anchored at a tonic: the ordered note classes obtained by
//! cumulatively summing the mode's steps from the tonic's note class. Keys
//! are derived on demand and never stored.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::pitch::{key_number_to_note, PitchClass, OCTAVE_BASE};

/// Zero-based position of a note within a key.
///
/// Kept distinct from plain array indices: a degree is a musical position
/// that the span arithmetic reduces modulo the mode length, not a direct
/// subscript. Grid rows extend degrees past the mode length on purpose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ScaleDegree(pub usize);

impl ScaleDegree {
    /// The tonic's degree.
    pub const TONIC: ScaleDegree = ScaleDegree(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl std::ops::Add<usize> for ScaleDegree {
    type Output = ScaleDegree;

    fn add(self, rhs: usize) -> ScaleDegree {
        ScaleDegree(self.0 + rhs)
    }
}

/// The `L + 1` member note classes of the key anchored at `tonic`.
///
/// Index 0 is the tonic's note class; index `k` adds the first `k` steps of
/// the mode, reduced modulo the octave base. For any mode whose steps sum to
/// the octave base, index `L` repeats index 0 (octave closure).
pub fn key_notes(tonic: PitchClass, mode: &Mode) -> Vec<u8> {
    let mut notes = Vec::with_capacity(mode.len() + 1);
    notes.push(tonic.note());

    let mut step_sum: i32 = 0;
    for &step in mode.steps() {
        step_sum += step as i32;
        notes.push((tonic.note() as i32 + step_sum).rem_euclid(OCTAVE_BASE) as u8);
    }
    notes
}

/// Cumulative pitches of the mode above a base key number, base omitted.
///
/// Unlike [`key_notes`] the results are not reduced to note classes, so
/// they keep climbing past the octave.
pub fn notes_above(base: i32, mode: &Mode) -> Vec<i32> {
    let mut step_sum: i32 = 0;
    mode.steps()
        .iter()
        .map(|&step| {
            step_sum += step as i32;
            base + step_sum
        })
        .collect()
}

/// Scale degree of a pitch within the key, or `None` for a note class
/// foreign to the key (chromatic alterations outside the mode).
pub fn scale_degree_of(pc: PitchClass, tonic: PitchClass, mode: &Mode) -> Option<ScaleDegree> {
    key_notes(tonic, mode)
        .iter()
        .position(|&note| note == pc.note())
        .map(ScaleDegree)
}

/// Scale degree of a key number within the key.
///
/// The key number is reduced to its note class first, so the answer carries
/// no octave context.
pub fn scale_degree_of_key_number(
    key_number: i32,
    tonic: PitchClass,
    mode: &Mode,
) -> Option<ScaleDegree> {
    let note = key_number_to_note(key_number);
    key_notes(tonic, mode)
        .iter()
        .position(|&n| n == note)
        .map(ScaleDegree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode;

    #[test]
    fn key_notes_of_c_major() {
        let tonic = PitchClass::new(0, 4);
        assert_eq!(
            key_notes(tonic, mode::major()),
            vec![0, 2, 4, 5, 7, 9, 11, 0]
        );
    }

    #[test]
    fn key_notes_of_e_major() {
        // E major: C#, D#, E, F#, G#, A, B reordered from the tonic.
        let tonic = PitchClass::new(4, 3);
        assert_eq!(
            key_notes(tonic, mode::major()),
            vec![4, 6, 8, 9, 11, 1, 3, 4]
        );
    }

    #[test]
    fn octave_closure_for_octave_spanning_modes() {
        // The verbatim chromatic (sum 11), aeolian and natural_minor
        // (sum 13) tables overshoot or undershoot the octave; their literal
        // landing notes are pinned below instead.
        let off_octave = ["chromatic", "aeolian", "natural_minor"];
        for (name, m) in mode::modes().filter(|(n, _)| !off_octave.contains(n)) {
            for note in 0..12u8 {
                let tonic = PitchClass::new(note, 4);
                let notes = key_notes(tonic, m);
                assert_eq!(
                    notes[0],
                    notes[m.len()],
                    "octave closure failed for {name} at tonic {note}"
                );
            }
        }
    }

    #[test]
    fn off_octave_modes_land_beside_the_tonic() {
        let tonic = PitchClass::new(0, 4);
        // Eleven semitone steps stop one short of the octave.
        let notes = key_notes(tonic, mode::chromatic());
        assert_eq!(notes[mode::chromatic().len()], 11);
        // The sum-13 minor tables run one past it.
        for m in [mode::aeolian(), mode::natural_minor()] {
            assert_eq!(key_notes(tonic, m)[m.len()], 1);
        }
    }

    #[test]
    fn scale_degree_round_trips_through_key_notes() {
        let tonic = PitchClass::new(5, 2);
        for (name, m) in mode::modes() {
            let notes = key_notes(tonic, m);
            for (k, &note) in notes.iter().enumerate() {
                let degree = scale_degree_of(PitchClass::new(note, 0), tonic, m)
                    .unwrap_or_else(|| panic!("member note missing from {name}"));
                // indexOf semantics: the first matching index wins, so the
                // octave-repeated tonic at index L resolves to degree 0.
                let expected = notes.iter().position(|&n| n == note).unwrap();
                assert_eq!(degree, ScaleDegree(expected), "mode {name}, index {k}");
            }
        }
    }

    #[test]
    fn foreign_note_has_no_degree() {
        let tonic = PitchClass::new(0, 4);
        // F# is not in C major.
        assert_eq!(scale_degree_of(PitchClass::new(6, 4), tonic, mode::major()), None);
    }

    #[test]
    fn degree_lookup_by_key_number_discards_octave() {
        let tonic = PitchClass::new(0, 4);
        // A4 (69) and A1 (33) resolve to the same degree in C major.
        assert_eq!(
            scale_degree_of_key_number(69, tonic, mode::major()),
            Some(ScaleDegree(5))
        );
        assert_eq!(
            scale_degree_of_key_number(33, tonic, mode::major()),
            Some(ScaleDegree(5))
        );
    }

    #[test]
    fn notes_above_keeps_absolute_pitches() {
        // From A4 up through the major mode, unreduced.
        assert_eq!(
            notes_above(69, mode::major()),
            vec![71, 73, 74, 76, 78, 80, 81]
        );
    }
}
