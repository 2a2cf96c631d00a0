//! Built-in mode catalog and its fixed orderings.
//!
//! A mode is an ordered sequence of ascending interval steps; from those
//! steps a key (the concrete member note classes) is computed at any tonic.
//! For a 12-tone system the steps of one full traversal are expected to sum
//! to [`OCTAVE_BASE`](crate::pitch::OCTAVE_BASE); the wraparound arithmetic
//! assumes it but the constructor does not enforce it. Three shipped tables
//! are kept verbatim despite missing that sum: `chromatic` (11), and
//! `aeolian`/`natural_minor` (13).
//!
//! Scale degrees use zero-based counting, unlike music theory literature.
//!
//! The catalog is an immutable process-wide registry built once behind a
//! `OnceLock` and exposed through accessor functions only. Modes with few or no
//! avoid notes (lydian, pentatonic, dorian) are the safest pick for always
//! sounding musical.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// An ordered sequence of ascending semitone steps defining a scale shape.
///
/// Validated at construction: at least one step, every step positive. The
/// number of steps is the number of scale degrees before octave repetition
/// (7 for diatonic modes, 5 for pentatonic).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Mode {
    steps: Vec<u8>,
}

impl Mode {
    /// Register a mode from its step sequence.
    ///
    /// Fails fast on configuration errors (empty sequence, zero step) so
    /// the arithmetic layer never sees a degenerate table.
    pub fn new(steps: Vec<u8>) -> Result<Self, TheoryError> {
        if steps.is_empty() {
            return Err(TheoryError::EmptyMode);
        }
        if let Some(index) = steps.iter().position(|&s| s == 0) {
            return Err(TheoryError::ZeroStep { index });
        }
        Ok(Self { steps })
    }

    /// The interval steps, ascending from the tonic.
    pub fn steps(&self) -> &[u8] {
        &self.steps
    }

    /// Number of scale degrees before octave repetition (`L`).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed mode; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl TryFrom<Vec<u8>> for Mode {
    type Error = TheoryError;

    fn try_from(steps: Vec<u8>) -> Result<Self, Self::Error> {
        Mode::new(steps)
    }
}

impl From<Mode> for Vec<u8> {
    fn from(mode: Mode) -> Self {
        mode.steps
    }
}

/// Built-in mode step tables. Avoid-note remarks follow the scale-degree
/// numbering of the key each mode generates.
const BUILTIN_MODES: &[(&str, &[u8])] = &[
    ("major", &[2, 2, 1, 2, 2, 2, 1]),             // avoid note at degree 3
    ("mixolydian", &[2, 2, 1, 2, 2, 1, 2]),        // avoid note at degree 3
    ("dorian", &[2, 1, 2, 2, 2, 1, 2]),            // avoid note at degree 5
    ("aeolian", &[2, 1, 2, 2, 2, 2, 2]),           // avoid note at degree 5
    ("phrygian", &[1, 2, 2, 2, 1, 2, 2]),          // avoid notes at degrees 1 and 5
    ("lydian", &[2, 2, 2, 1, 2, 2, 1]),            // no avoid notes
    ("locrian", &[1, 2, 2, 1, 2, 2, 2]),           // avoid note at degree 1
    ("mixolydian_plus_11", &[2, 2, 2, 1, 2, 1, 2]), // no avoid notes
    ("melodic_minor", &[2, 1, 2, 2, 2, 2, 1]),     // no avoid notes
    ("harmonic_minor", &[2, 1, 2, 2, 1, 3, 1]),
    ("natural_minor", &[2, 1, 2, 2, 2, 2, 2]),
    ("chromatic", &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    ("pentatonic", &[2, 2, 3, 2, 3]), // no avoid notes
];

/// Modes arranged by the cycle of fifths.
const CYCLE_OF_FIFTHS: [&str; 7] = [
    "major",
    "mixolydian",
    "dorian",
    "aeolian",
    "phrygian",
    "locrian",
    "lydian",
];

/// Modes sorted from lighter to darker quality; eight entries, matching the
/// grid dimensions the selection UI drives.
const LIGHT_TO_DARK: [&str; 8] = [
    "pentatonic",
    "lydian",
    "major",
    "mixolydian_plus_11",
    "dorian",
    "aeolian",
    "phrygian",
    "locrian",
];

fn catalog() -> &'static [(&'static str, Mode)] {
    static CATALOG: OnceLock<Vec<(&'static str, Mode)>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        BUILTIN_MODES
            .iter()
            .map(|&(name, steps)| {
                let mode = Mode::new(steps.to_vec()).expect("built-in mode tables are valid");
                (name, mode)
            })
            .collect()
    })
}

/// All built-in modes in catalog order.
pub fn modes() -> impl Iterator<Item = (&'static str, &'static Mode)> {
    catalog().iter().map(|(name, mode)| (*name, mode))
}

/// Look up a built-in mode by name.
pub fn mode_by_name(name: &str) -> Option<&'static Mode> {
    catalog()
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, mode)| mode)
}

fn builtin(name: &'static str) -> &'static Mode {
    mode_by_name(name).expect("name is in the built-in table")
}

fn ordering(names: &[&'static str]) -> Vec<(&'static str, &'static Mode)> {
    names.iter().map(|&name| (name, builtin(name))).collect()
}

/// The diatonic modes ordered by the cycle of fifths.
pub fn cycle_of_fifths_modes() -> &'static [(&'static str, &'static Mode)] {
    static ORDER: OnceLock<Vec<(&'static str, &'static Mode)>> = OnceLock::new();
    ORDER.get_or_init(|| ordering(&CYCLE_OF_FIFTHS))
}

/// Modes ordered from lightest to darkest quality.
pub fn light_to_dark_modes() -> &'static [(&'static str, &'static Mode)] {
    static ORDER: OnceLock<Vec<(&'static str, &'static Mode)>> = OnceLock::new();
    ORDER.get_or_init(|| ordering(&LIGHT_TO_DARK))
}

pub fn major() -> &'static Mode {
    builtin("major")
}

pub fn mixolydian() -> &'static Mode {
    builtin("mixolydian")
}

pub fn dorian() -> &'static Mode {
    builtin("dorian")
}

pub fn aeolian() -> &'static Mode {
    builtin("aeolian")
}

pub fn phrygian() -> &'static Mode {
    builtin("phrygian")
}

pub fn lydian() -> &'static Mode {
    builtin("lydian")
}

pub fn locrian() -> &'static Mode {
    builtin("locrian")
}

pub fn mixolydian_plus_11() -> &'static Mode {
    builtin("mixolydian_plus_11")
}

pub fn melodic_minor() -> &'static Mode {
    builtin("melodic_minor")
}

pub fn harmonic_minor() -> &'static Mode {
    builtin("harmonic_minor")
}

pub fn natural_minor() -> &'static Mode {
    builtin("natural_minor")
}

pub fn chromatic() -> &'static Mode {
    builtin("chromatic")
}

pub fn pentatonic() -> &'static Mode {
    builtin("pentatonic")
}
