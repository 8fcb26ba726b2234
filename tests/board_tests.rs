//! Board tests - flat-storage grid operations

use tui_2048::core::Board;
use tui_2048::types::{GRID_CELLS, GRID_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            assert_eq!(board.get(r, c), 0, "cell ({}, {}) should be empty", r, c);
        }
    }
    assert_eq!(board.empty_count(), GRID_CELLS);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    board.set(2, 1, 64);
    assert_eq!(board.get(2, 1), 64);

    board.set(2, 1, 0);
    assert_eq!(board.get(2, 1), 0);
    assert_eq!(board.empty_count(), GRID_CELLS);
}

#[test]
fn test_board_row_and_col_access() {
    let mut board = Board::new();
    board.set_row(1, [2, 4, 8, 16]);
    board.set_col(0, [32, 64, 128, 256]);

    // The column write overlaps the row at (1, 0).
    assert_eq!(board.row(1), [64, 4, 8, 16]);
    assert_eq!(board.col(0), [32, 64, 128, 256]);
}

#[test]
fn test_board_from_rows_round_trip() {
    let rows = [[0, 2, 0, 4], [8, 0, 16, 0], [0, 32, 0, 64], [128, 0, 256, 0]];
    let board = Board::from_rows(rows);
    assert_eq!(board.to_rows(), rows);
    assert_eq!(board.max_tile(), 256);
    assert_eq!(board.empty_count(), 8);
}

#[test]
fn test_board_is_full() {
    let mut board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(board.is_full());

    board.set(0, 0, 0);
    assert!(!board.is_full());
    assert_eq!(board.empty_count(), 1);
}

#[test]
fn test_board_copy_semantics() {
    let mut original = Board::new();
    original.set(0, 0, 2);

    // Boards move by value: mutating a copy never aliases the original.
    let mut copy = original;
    copy.set(0, 0, 4);

    assert_eq!(original.get(0, 0), 2);
    assert_eq!(copy.get(0, 0), 4);
}
