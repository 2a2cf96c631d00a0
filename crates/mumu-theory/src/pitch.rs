//! Pitch representation and key-number (MIDI) conversion.
//!
//! A key number is an absolute semitone index carrying both note class and
//! octave. The canonical convention throughout this crate is the MIDI one:
//!
//! ```text
//! key_number = note + OCTAVE_BASE * (octave + 1)
//! ```
//!
//! so `PitchClass::new(0, 4)` (C4) is key number 60. The inverse uses
//! euclidean division with the same `-1` offset; the pair round-trips for
//! every integer key number, negative ones included.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of distinct pitch classes per octave.
///
/// Microtonal tunings would change this constant and supply modes whose
/// steps sum to it; the shipped mode and chord tables assume 12.
pub const OCTAVE_BASE: i32 = 12;

/// Note names for the 12-tone octave (sharps only).
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// An absolute pitch as a (note class, octave) pair.
///
/// Immutable value type: created wherever a tonic or fixed pitch is needed,
/// never mutated. The fields are private so the note-class range invariant
/// holds for every instance; construction (including deserialization)
/// reduces the note into `[0, OCTAVE_BASE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPitchClass")]
pub struct PitchClass {
    note: u8,
    octave: i32,
}

/// Wire shape of [`PitchClass`]; deserialization funnels through
/// [`PitchClass::new`] so an out-of-range note class cannot enter.
#[derive(Deserialize)]
struct RawPitchClass {
    note: u8,
    octave: i32,
}

impl From<RawPitchClass> for PitchClass {
    fn from(raw: RawPitchClass) -> Self {
        PitchClass::new(raw.note, raw.octave)
    }
}

impl PitchClass {
    /// Create a pitch, reducing `note` into `[0, OCTAVE_BASE)`.
    pub fn new(note: u8, octave: i32) -> Self {
        Self {
            note: note % OCTAVE_BASE as u8,
            octave,
        }
    }

    /// Note class in `[0, OCTAVE_BASE)`: C = 0, C# = 1, ... B = 11.
    pub fn note(self) -> u8 {
        self.note
    }

    /// Octave under the MIDI convention (octave 4 holds middle C).
    pub fn octave(self) -> i32 {
        self.octave
    }

    /// Absolute key number (MIDI note number for the standard octave base).
    pub fn key_number(self) -> i32 {
        self.note as i32 + OCTAVE_BASE * (self.octave + 1)
    }

    /// Inverse of [`PitchClass::key_number`].
    pub fn from_key_number(key_number: i32) -> Self {
        Self {
            note: key_number.rem_euclid(OCTAVE_BASE) as u8,
            octave: key_number.div_euclid(OCTAVE_BASE) - 1,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", NOTE_NAMES[(self.note % 12) as usize], self.octave)
    }
}

/// Reduce a key number to its note class.
pub fn key_number_to_note(key_number: i32) -> u8 {
    key_number.rem_euclid(OCTAVE_BASE) as u8
}
