//! Error types for modal pitch arithmetic.

use thiserror::Error;

/// Errors that can occur when registering modes or resolving pitches.
///
/// The domain is closed-form arithmetic, so the taxonomy is narrow: bad mode
/// data is rejected when the mode is constructed, degenerate grid dimensions
/// when the fretboard is, and transposition of a pitch class foreign to the
/// key is reported instead of being computed from a garbage scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("mode has no steps")]
    EmptyMode,
    #[error("mode step at index {index} must be positive")]
    ZeroStep { index: usize },
    #[error("note class {note} is not a member of the key")]
    PitchNotInKey { note: u8 },
    #[error("fretboard must have at least one fret")]
    NoFrets,
    #[error("fretboard must have at least one string")]
    NoStrings,
}
