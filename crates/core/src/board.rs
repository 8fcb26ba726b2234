//! Board module - the 4x4 tile grid
//!
//! Uses a flat array for cache locality and zero-allocation, stored row-major.
//! The board is `Copy`, so the shell can hand a value to the engine and
//! replace its own copy wholesale with the result - there is never aliasing
//! between the "current" and "proposed" board during a move.

use crate::types::{Tile, GRID_CELLS, GRID_SIZE};

/// The game board - a 4x4 grid of tile values in flat row-major storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * GRID_SIZE + col)
    cells: [Tile; GRID_CELLS],
}

impl Board {
    /// Create a new empty board (all cells zero)
    pub fn new() -> Self {
        Self {
            cells: [0; GRID_CELLS],
        }
    }

    /// Build a board from row-major 2D data
    pub fn from_rows(rows: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.set(r, c, value);
            }
        }
        board
    }

    /// Convert to row-major 2D data
    pub fn to_rows(&self) -> [[Tile; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.get(r, c);
            }
        }
        rows
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        row * GRID_SIZE + col
    }

    /// Get the tile value at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[Self::index(row, col)]
    }

    /// Set the tile value at (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[Self::index(row, col)] = value;
    }

    /// Extract a row as a line, left to right
    pub fn row(&self, row: usize) -> [Tile; GRID_SIZE] {
        let start = row * GRID_SIZE;
        let mut line = [0; GRID_SIZE];
        line.copy_from_slice(&self.cells[start..start + GRID_SIZE]);
        line
    }

    /// Store a line back into a row
    pub fn set_row(&mut self, row: usize, line: [Tile; GRID_SIZE]) {
        let start = row * GRID_SIZE;
        self.cells[start..start + GRID_SIZE].copy_from_slice(&line);
    }

    /// Extract a column as a line, top to bottom
    pub fn col(&self, col: usize) -> [Tile; GRID_SIZE] {
        let mut line = [0; GRID_SIZE];
        for (row, value) in line.iter_mut().enumerate() {
            *value = self.get(row, col);
        }
        line
    }

    /// Store a line back into a column, top to bottom
    pub fn set_col(&mut self, col: usize, line: [Tile; GRID_SIZE]) {
        for (row, &value) in line.iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Count empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile currently on the board
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
