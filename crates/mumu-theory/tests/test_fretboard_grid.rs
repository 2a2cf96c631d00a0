//! Integration tests for fretboard/grid generation.
//!
//! These pin the published note matrices: the 10x10 Guqin grid the game
//! layer walks, and a standard guitar tuning expressed as modal steps.

use pretty_assertions::assert_eq;

use mumu_theory::{mode, FretBoard, PitchClass, ScaleDegree};

/// The canonical 10x10 Guqin grid matrix (MIDI key numbers).
const GUQIN_MATRIX: [[i32; 10]; 10] = [
    [48, 50, 53, 55, 57, 60, 62, 65, 67, 69],
    [50, 53, 55, 57, 60, 62, 65, 67, 69, 72],
    [53, 55, 57, 60, 62, 65, 67, 69, 72, 74],
    [55, 57, 60, 62, 65, 67, 69, 72, 74, 77],
    [57, 60, 62, 65, 67, 69, 72, 74, 77, 79],
    [60, 62, 65, 67, 69, 72, 74, 77, 79, 81],
    [62, 65, 67, 69, 72, 74, 77, 79, 81, 84],
    [65, 67, 69, 72, 74, 77, 79, 81, 84, 86],
    [67, 69, 72, 74, 77, 79, 81, 84, 86, 89],
    [69, 72, 74, 77, 79, 81, 84, 86, 89, 91],
];

#[test]
fn guqin_grid_reproduces_published_matrix() {
    let board = FretBoard::guqin_grid();
    let expected: Vec<Vec<i32>> = GUQIN_MATRIX.iter().map(|row| row.to_vec()).collect();
    assert_eq!(board.frets(), &expected[..]);
}

#[test]
fn guqin_grid_wraps_out_of_range_coordinates() {
    let board = FretBoard::guqin_grid();
    for x in 0..10 {
        for y in 0..10 {
            assert_eq!(board.get_note_at(x + 10, y), board.get_note_at(x, y));
            assert_eq!(board.get_note_at(x, y + 10), board.get_note_at(x, y));
            assert_eq!(board.get_note_at(x + 20, y + 30), board.get_note_at(x, y));
        }
    }
    assert_eq!(board.get_note_at(0, 0), 48);
    assert_eq!(board.get_note_at(10, 10), 48);
}

#[test]
fn guqin_grid_recompute_is_stable() {
    let mut board = FretBoard::guqin_grid();
    let first = board.frets().to_vec();
    board.calculate_frets(2);
    assert_eq!(board.frets(), &first[..]);
}

#[test]
fn standard_guitar_tuning_from_modal_steps() {
    // E dorian with string steps [0, 3, 3, 3, 2, 3, 2, 2]: the open strings
    // come out as E2 A2 D3 G3 B3 E4, plus the G4/B4 columns that pad the
    // instrument out to grid width.
    let board = FretBoard::new(
        "guitar_standard",
        vec![0, 3, 3, 3, 2, 3, 2, 2],
        8,
        ScaleDegree(0),
        PitchClass::new(4, 2), // E2, MIDI 40
        mode::dorian().clone(),
    )
    .unwrap();
    assert_eq!(board.frets()[0], vec![40, 45, 50, 55, 59, 64, 67, 71]);
}

#[test]
fn every_grid_cell_is_in_key() {
    let board = FretBoard::guqin_grid();
    let members = mumu_theory::key_notes(board.tonic(), board.mode());
    for row in board.frets() {
        for &cell in row {
            let note = mumu_theory::key_number_to_note(cell);
            assert!(members.contains(&note), "cell {cell} is outside the key");
        }
    }
}
