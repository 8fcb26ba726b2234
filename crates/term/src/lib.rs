//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders the
//! game state into a simple framebuffer that is then flushed to a terminal
//! backend with run-diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so it can be asserted against in tests
//! - Keep terminal I/O behind one small type

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
