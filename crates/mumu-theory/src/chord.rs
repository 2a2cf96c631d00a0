//! Circle-of-fifths chord-root selection.
//!
//! Chord progressions that sound good come from any six adjacent cells of
//! [`CHORD_MAP`]. Modulating keys safely means rotating the six-cell window
//! along the columns. The further apart two windows sit (max distance 6),
//! the more distant their chords are harmonically. The ear needs to
//! traverse a harmonic space to build context before modulating further
//! out.

use serde::{Deserialize, Serialize};

/// Chord-root tables ordered by the cycle of fifths: one row of major-type
/// roots, one of minor-type roots.
pub const CHORD_MAP: [[u8; 12]; 2] = [
    [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5], // major modes/chords
    [9, 4, 11, 6, 1, 8, 3, 10, 5, 0, 7, 2], // minor modes/chords
];

/// One six-chord selection window: three adjacent major-type roots and the
/// three minor-type roots aligned under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordPair {
    pub major: [u8; 3],
    pub minor: [u8; 3],
}

/// Pick one of the 12 possible six-chord sets by rotation index.
///
/// Indices are taken modulo the table length, so every input is valid and
/// the window wraps around the circle.
pub fn chords_at(index: usize) -> ChordPair {
    fn window(row: &[u8; 12], index: usize) -> [u8; 3] {
        [
            row[index % row.len()],
            row[(index + 1) % row.len()],
            row[(index + 2) % row.len()],
        ]
    }

    ChordPair {
        major: window(&CHORD_MAP[0], index),
        minor: window(&CHORD_MAP[1], index),
    }
}
