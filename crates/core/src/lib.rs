//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! sliding-tile puzzle. It has **zero dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for the slide/merge pipeline
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile grid in flat storage, passed by value across the
//!   engine boundary
//! - [`engine`]: the state-transition functions (slide/merge, spawn,
//!   terminal detection)
//! - [`game_state`]: board + score + RNG lifecycle owned by the shell
//! - [`rng`]: seedable LCG so spawn behavior is reproducible
//!
//! # Game Rules
//!
//! - A shift compacts every line toward one edge; equal adjacent tiles merge
//!   into one tile of double value, at most once per tile per move
//! - Each merge adds the merged-tile value to the score
//! - A shift that changes nothing is discarded: no score, no spawn
//! - After a committed shift one tile spawns on a random empty cell
//!   (2 with 90% probability, 4 with 10%)
//! - The game ends when the board is full and no adjacent equal pair remains
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//!
//! // Apply moves; a move that changes nothing reports false.
//! game.apply_action(GameAction::Shift(Direction::Left));
//!
//! // Fresh boards always have a legal move.
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod engine;
pub mod game_state;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use engine::{can_move, initialize, slide, slide_line, spawn_tile};
pub use game_state::GameState;
pub use rng::SimpleRng;
