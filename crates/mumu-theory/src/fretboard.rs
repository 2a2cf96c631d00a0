//! Note-grid generation for tuned string layouts.
//!
//! A [`FretBoard`] models any zither/guitar-style playable surface: a matrix
//! of absolute key numbers where row `j` is a rising scale-degree step (one
//! per fret) and column `i` is a string. Only notes of the chosen tonic and
//! mode appear, so anything traversing the grid stays in key.
//!
//! Tunings are expressed as modal steps between adjacent open strings, not
//! semitones. Two worked examples, both reproduced by the integration tests:
//!
//! - Standard guitar: E dorian, string steps `[0, 3, 3, 3, 2, 3, 2, 2]`
//!   from degree 0 gives E - A - D - G - B - E (- G - B for the extra grid
//!   columns).
//! - Guqin: F pentatonic, string steps `[0, 1, ...]` from degree 3 gives
//!   C - D - F - G - A - C - D ...

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::key::ScaleDegree;
use crate::mode::{self, Mode};
use crate::pitch::{PitchClass, OCTAVE_BASE};
use crate::transpose::modal_step_span;

/// A tuned instrument's playable note grid.
///
/// Constructed fully populated (octave offset 0) and immutable thereafter;
/// [`FretBoard::calculate_frets`] recomputes the whole matrix and replaces
/// it, which is the entire update protocol. No partial mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretBoard {
    name: String,
    string_steps: Vec<i32>,
    num_frets: usize,
    scale_degree: ScaleDegree,
    tonic: PitchClass,
    mode: Mode,
    frets: Vec<Vec<i32>>,
}

impl FretBoard {
    /// Build a fretboard and compute its note matrix.
    ///
    /// `string_steps` holds the modal-step distance from each previous
    /// string's open pitch (index 0 is the offset of the first string,
    /// conventionally 0). `scale_degree` anchors the first fret row;
    /// successive rows climb one scale degree each.
    ///
    /// A board with zero frets or zero strings is a configuration error,
    /// rejected here so the wraparound cell addressing stays total.
    pub fn new(
        name: impl Into<String>,
        string_steps: Vec<i32>,
        num_frets: usize,
        scale_degree: ScaleDegree,
        tonic: PitchClass,
        mode: Mode,
    ) -> Result<Self, TheoryError> {
        if num_frets == 0 {
            return Err(TheoryError::NoFrets);
        }
        if string_steps.is_empty() {
            return Err(TheoryError::NoStrings);
        }

        let mut board = Self {
            name: name.into(),
            string_steps,
            num_frets,
            scale_degree,
            tonic,
            mode,
            frets: Vec::new(),
        };
        board.calculate_frets(0);
        Ok(board)
    }

    /// The 10x10 "Guqin_10_String" grid: F pentatonic tuned in single modal
    /// steps, anchored at scale degree 3, sounding from C3 (MIDI 48) at the
    /// top-left cell.
    pub fn guqin_grid() -> Self {
        let mut board = Self::new(
            "Guqin_10_String",
            vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            10,
            ScaleDegree(3),
            PitchClass::new(5, 0),
            mode::pentatonic().clone(),
        )
        .expect("preset dimensions are valid");
        board.calculate_frets(2);
        board
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_frets(&self) -> usize {
        self.num_frets
    }

    pub fn num_strings(&self) -> usize {
        self.string_steps.len()
    }

    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The computed matrix: `frets[j][i]` is the key number at fret row `j`,
    /// string `i`.
    pub fn frets(&self) -> &[Vec<i32>] {
        &self.frets
    }

    /// Recompute the note matrix, shifting every cell by `octave_offset`
    /// octaves, and replace the stored one.
    ///
    /// Pure function of the construction parameters and the offset: calling
    /// it twice with the same offset yields identical matrices.
    pub fn calculate_frets(&mut self, octave_offset: i32) -> &[Vec<i32>] {
        let step_offset = OCTAVE_BASE * octave_offset;
        let tonic_key_number = self.tonic.key_number();

        let mut rows = Vec::with_capacity(self.num_frets);
        for j in 0..self.num_frets {
            let degree = self.scale_degree + j;

            // The tonic sits at degree 0 of its own key by construction, so
            // the row base never needs a key-membership lookup: it is the
            // tonic climbed `degree` scale steps.
            let base = tonic_key_number
                + modal_step_span(ScaleDegree::TONIC, degree.index() as i32, &self.mode);

            let mut row = Vec::with_capacity(self.string_steps.len());
            let mut step_sum: i32 = 0;
            for &string_step in &self.string_steps {
                step_sum += string_step;
                let span = modal_step_span(degree, step_sum, &self.mode);
                row.push(base + span + step_offset);
            }
            rows.push(row);
        }

        self.frets = rows;
        &self.frets
    }

    /// Key number at grid coordinate `(x, y)`, fret row `x`, string `y`.
    ///
    /// Out-of-range coordinates wrap modulo the matrix's own dimensions
    /// rather than failing; grid-walking callers rely on this. Total for
    /// every coordinate, since construction rejects empty dimensions.
    pub fn get_note_at(&self, x: usize, y: usize) -> i32 {
        let row = &self.frets[x % self.frets.len()];
        row[y % row.len()]
    }
}
