//! Modal transposition: moving a pitch by scale-degree steps, not semitones.
//!
//! The core quantity is the step span: the net semitone displacement of
//! walking a signed number of scale positions from a starting degree, with
//! wraparound across the mode boundary. Ascending walks sum the step table
//! forward. Descending walks reuse the forward loop on the *reversed* step
//! table from an *inverted* degree index and negate the sum.
//!
//! The descending construction is an algebraic shortcut. It does not match
//! the plain "walk backward through the mode" definition. In the major
//! mode, one step down from the tonic spans two semitones under this
//! algorithm; a plain backward walk would span one. The published grids
//! were computed with the shortcut, so it is kept exactly as is and pinned
//! by `descending_span_uses_reversed_mode_not_plain_walk`.

use crate::error::TheoryError;
use crate::key::{scale_degree_of_key_number, ScaleDegree};
use crate::mode::Mode;
use crate::pitch::{key_number_to_note, PitchClass};

/// Net semitone displacement of `num_steps` scale positions from `degree`.
///
/// Zero steps always spans zero semitones. Degrees at or past the mode
/// length are reduced modulo the length, so grid rows can extend degrees
/// freely.
pub fn modal_step_span(degree: ScaleDegree, num_steps: i32, mode: &Mode) -> i32 {
    let len = mode.len();
    let steps = mode.steps();
    let mut sum: i32 = 0;

    if num_steps >= 0 {
        for i in 0..num_steps as usize {
            sum += steps[(degree.index() + i) % len] as i32;
        }
    } else {
        // Reversed table, inverted degree. Euclidean remainder keeps the
        // start index in range for degrees at or past the mode length.
        let inverted = (len as i64 - 1 - degree.index() as i64).rem_euclid(len as i64) as usize;
        let reversed: Vec<u8> = steps.iter().rev().copied().collect();
        for i in 0..num_steps.unsigned_abs() as usize {
            sum -= reversed[(inverted + i) % len] as i32;
        }
    }

    sum
}

/// Transpose an absolute key number by `num_steps` scale positions within
/// the key anchored at `tonic`.
///
/// The starting degree is resolved from the key number's note class; a note
/// class foreign to the key is an error rather than an arbitrary result.
/// Ascending transposition preserves octave placement (the span is added to
/// the octave-bearing key number).
pub fn transpose_key_number(
    key_number: i32,
    num_steps: i32,
    tonic: PitchClass,
    mode: &Mode,
) -> Result<i32, TheoryError> {
    let degree = scale_degree_of_key_number(key_number, tonic, mode).ok_or_else(|| {
        TheoryError::PitchNotInKey {
            note: key_number_to_note(key_number),
        }
    })?;
    Ok(key_number + modal_step_span(degree, num_steps, mode))
}

/// [`transpose_key_number`] returning the result as a [`PitchClass`].
pub fn transpose(
    pc: PitchClass,
    num_steps: i32,
    tonic: PitchClass,
    mode: &Mode,
) -> Result<PitchClass, TheoryError> {
    transpose_key_number(pc.key_number(), num_steps, tonic, mode)
        .map(PitchClass::from_key_number)
}
