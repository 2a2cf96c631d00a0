//! MuMu Theory - Modal Pitch Arithmetic for Generative Music
//!
//! This crate computes musical pitch relationships: absolute note values,
//! scale membership, and position-to-position transposition within an
//! arbitrary modal scale. On top of the transposition algorithm it derives
//! two-dimensional instrument note grids (fretboards) and circle-of-fifths
//! chord triples, so a caller can ask which MIDI note sounds at a given
//! fret/string or grid cell for a chosen tonic and mode.
//!
//! Everything here is a pure, deterministic function over small in-memory
//! tables. There is no I/O, no clock, and no shared mutable state; the
//! built-in mode and chord tables are immutable process-wide constants, so
//! concurrent callers can share them freely.
//!
//! # Example
//!
//! ```
//! use mumu_theory::{key_notes, mode, transpose_key_number, PitchClass};
//!
//! // C major: the key members close back on the tonic an octave up.
//! let tonic = PitchClass::new(0, 4); // C4, MIDI 60
//! assert_eq!(key_notes(tonic, mode::major()), vec![0, 2, 4, 5, 7, 9, 11, 0]);
//!
//! // A4 (MIDI 69) moved up four scale steps within C major lands on E5.
//! let up = transpose_key_number(69, 4, tonic, mode::major()).unwrap();
//! assert_eq!(up, 76);
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: `PitchClass` value type and key-number (MIDI) conversion
//! - [`mode`]: built-in mode catalog and its fixed orderings
//! - [`key`]: key membership and scale-degree resolution
//! - [`transpose`]: the modal step-span and transposition algorithm
//! - [`fretboard`]: note-grid generation for tuned string layouts
//! - [`chord`]: circle-of-fifths chord-root selection

pub mod chord;
pub mod error;
pub mod fretboard;
pub mod key;
pub mod mode;
pub mod pitch;
pub mod transpose;

// Re-export commonly used types at the crate root
pub use chord::{chords_at, ChordPair, CHORD_MAP};
pub use error::TheoryError;
pub use fretboard::FretBoard;
pub use key::{key_notes, notes_above, scale_degree_of, scale_degree_of_key_number, ScaleDegree};
pub use mode::Mode;
pub use pitch::{key_number_to_note, PitchClass, OCTAVE_BASE};
pub use transpose::{modal_step_span, transpose, transpose_key_number};
