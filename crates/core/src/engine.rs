//! Engine module - pure board transitions
//!
//! These functions are the whole game-rule surface: slide-and-merge a line,
//! shift the board in a direction, spawn a random tile, and detect the
//! terminal state. They perform no I/O and touch no global state; the only
//! randomness comes from an injected [`SimpleRng`].
//!
//! Direction handling is normalized so that "slide" always means "compact
//! toward index 0": Right and Down reverse the extracted line before and
//! after [`slide_line`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{
    Direction, Tile, FOUR_SPAWN_PERCENT, GRID_SIZE, INITIAL_TILES, SPAWN_TILE_HIGH, SPAWN_TILE_LOW,
};

/// Slide a single line toward index 0, merging equal adjacent tiles.
///
/// Each pair of equal tiles merges into one tile of double value; a freshly
/// merged tile does not merge again within the same pass, so `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
///
/// Returns the compacted line (zero-padded to `GRID_SIZE`) and the score
/// delta: the sum of all merged-tile values created in this line.
pub fn slide_line(line: [Tile; GRID_SIZE]) -> ([Tile; GRID_SIZE], u32) {
    let occupied: ArrayVec<Tile, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; GRID_SIZE];
    let mut score = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < occupied.len() {
        if read + 1 < occupied.len() && occupied[read] == occupied[read + 1] {
            let merged = occupied[read] * 2;
            out[write] = merged;
            score += merged;
            read += 2;
        } else {
            out[write] = occupied[read];
            read += 1;
        }
        write += 1;
    }

    (out, score)
}

/// Shift the whole board in a direction.
///
/// Returns the next board and the total score delta (sum of merged-tile
/// values across all lines). The input board is untouched; callers compare
/// the result against it to detect a no-op move.
pub fn slide(board: &Board, direction: Direction) -> (Board, u32) {
    let mut next = Board::new();
    let mut score = 0u32;

    match direction {
        Direction::Left | Direction::Right => {
            for r in 0..GRID_SIZE {
                let mut line = board.row(r);
                if direction == Direction::Right {
                    line.reverse();
                }
                let (mut slid, delta) = slide_line(line);
                if direction == Direction::Right {
                    slid.reverse();
                }
                next.set_row(r, slid);
                score += delta;
            }
        }
        Direction::Up | Direction::Down => {
            for c in 0..GRID_SIZE {
                let mut line = board.col(c);
                if direction == Direction::Down {
                    line.reverse();
                }
                let (mut slid, delta) = slide_line(line);
                if direction == Direction::Down {
                    slid.reverse();
                }
                next.set_col(c, slid);
                score += delta;
            }
        }
    }

    (next, score)
}

/// Spawn one random tile on an empty cell.
///
/// Picks uniformly among the empty cells and writes a 2 (90%) or a 4 (10%).
/// On a full board this is a no-op and returns `false`; the move pipeline
/// only spawns after a board-changing shift, which always leaves at least
/// one empty cell, but a full board must still be safe to pass in.
pub fn spawn_tile(board: &mut Board, rng: &mut SimpleRng) -> bool {
    let empties = board.empty_count();
    if empties == 0 {
        return false;
    }

    let target = rng.next_range(empties as u32) as usize;
    let value = if rng.next_range(100) < FOUR_SPAWN_PERCENT {
        SPAWN_TILE_HIGH
    } else {
        SPAWN_TILE_LOW
    };

    let mut seen = 0usize;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if board.get(r, c) == 0 {
                if seen == target {
                    board.set(r, c, value);
                    return true;
                }
                seen += 1;
            }
        }
    }

    // Unreachable: target < empties by construction.
    false
}

/// Create a starting board: all zeros plus two random tiles.
pub fn initialize(rng: &mut SimpleRng) -> Board {
    let mut board = Board::new();
    for _ in 0..INITIAL_TILES {
        spawn_tile(&mut board, rng);
    }
    board
}

/// Check whether any shift can still change the board.
///
/// True iff some cell is empty or some cell equals its immediate right or
/// below neighbor. This is necessary and sufficient: an empty cell admits a
/// slide, and an equal orthogonal pair admits a merge in the matching
/// direction. Single O(N^2) scan.
pub fn can_move(board: &Board) -> bool {
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = board.get(r, c);
            if value == 0 {
                return true;
            }
            if c + 1 < GRID_SIZE && board.get(r, c + 1) == value {
                return true;
            }
            if r + 1 < GRID_SIZE && board.get(r + 1, c) == value {
                return true;
            }
        }
    }
    false
}
