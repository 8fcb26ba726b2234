//! Game state module - board, score, and lifecycle
//!
//! Ties the engine functions together behind the state struct the shell
//! owns. All mutation goes through [`GameState::apply_action`]: a shift that
//! does not change the board is discarded without scoring or spawning, and a
//! committed shift spawns one tile and re-evaluates the terminal condition.

use crate::board::Board;
use crate::engine::{can_move, initialize, slide, spawn_tile};
use crate::rng::SimpleRng;
use crate::types::{Direction, GameAction};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    rng: SimpleRng,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The fresh board already holds the two starting tiles.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = initialize(&mut rng);
        Self {
            board,
            score: 0,
            rng,
            game_over: false,
        }
    }

    /// Create a game over an existing board position.
    ///
    /// Score starts at zero; the terminal flag is derived from the board.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let game_over = !can_move(&board);
        Self {
            board,
            score: 0,
            rng: SimpleRng::new(seed),
            game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Shift the board in a direction.
    ///
    /// Returns `true` if the move changed the board (and was committed:
    /// score added, one tile spawned, terminal state re-checked). A no-op
    /// shift and any input after game over return `false` and leave the
    /// state untouched.
    pub fn shift(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let (next, delta) = slide(&self.board, direction);
        if next == self.board {
            return false;
        }

        self.board = next;
        self.score += delta;
        spawn_tile(&mut self.board, &mut self.rng);

        if !can_move(&self.board) {
            self.game_over = true;
        }

        true
    }

    /// Reset to a fresh game, continuing the RNG stream.
    pub fn restart(&mut self) {
        self.board = initialize(&mut self.rng);
        self.score = 0;
        self.game_over = false;
    }

    /// Apply a shell action. Returns `true` if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Shift(direction) => self.shift(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
