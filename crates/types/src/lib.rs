//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The grid is the classic 2048 playfield: a square of `GRID_SIZE` (4) cells
//! per side, `GRID_CELLS` (16) cells total.
//!
//! # Tiles
//!
//! A cell holds a [`Tile`] value. `0` means empty; any non-zero value is a
//! power of two (2, 4, 8, ...). Two equal adjacent tiles merge into one tile
//! of double value when shifted together.
//!
//! # Spawning
//!
//! After every board-changing shift one new tile appears on a random empty
//! cell: a `2` with 90% probability, a `4` with 10% probability
//! (`FOUR_SPAWN_PERCENT`). A fresh board starts with `INITIAL_TILES` spawns.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! // Shell-facing actions wrap a direction
//! let action = GameAction::Shift(Direction::Up);
//! assert_ne!(action, GameAction::Restart);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Board side length in cells (4x4 grid)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// A single cell value: `0` is empty, non-zero values are powers of two
pub type Tile = u32;

/// Value of the common spawned tile (90% of spawns)
pub const SPAWN_TILE_LOW: Tile = 2;

/// Value of the rare spawned tile (10% of spawns)
pub const SPAWN_TILE_HIGH: Tile = 4;

/// Percentage of spawns that produce [`SPAWN_TILE_HIGH`]
pub const FOUR_SPAWN_PERCENT: u32 = 10;

/// Number of tiles spawned onto a fresh board
pub const INITIAL_TILES: usize = 2;

/// The four shift directions
///
/// A shift compacts every row or column of the board toward one edge,
/// merging equal adjacent tiles along the way. The enum carries no further
/// state; all direction-specific behavior lives in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order (useful for exhaustive scans)
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions that the shell can apply to the game state
///
/// Each directional key maps to a `Shift`; the restart key maps to `Restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift all tiles in the given direction, merging equal neighbors
    Shift(Direction),
    /// Reset the board and score to a fresh game
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_strings() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!(Direction::from_str("Up"), Some(Direction::Up));
        assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
        assert_eq!(Direction::from_str(""), None);
    }

    #[test]
    fn spawn_constants_match_game_rules() {
        assert_eq!(SPAWN_TILE_LOW, 2);
        assert_eq!(SPAWN_TILE_HIGH, 4);
        assert_eq!(FOUR_SPAWN_PERCENT, 10);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(GRID_CELLS, GRID_SIZE * GRID_SIZE);
    }
}
