//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tile grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square in typical terminal fonts and
        // leaves room for 4-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        // Header line above the frame, help line below it.
        let total_h = frame_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(total_h) / 2;
        let board_y = top + 1;

        self.draw_header(fb, state, start_x, top, frame_w);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, board_y, frame_w, frame_h, border);

        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                self.draw_tile(fb, start_x, board_y, r, c, state.board().get(r, c));
            }
        }

        if state.game_over() {
            self.draw_overlay(fb, start_x, board_y, frame_w, frame_h);
        }

        // Exactly frame_w characters wide at the default tile size.
        let help = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        fb.put_str(
            start_x,
            board_y + frame_h,
            "arrows move  r restart  q quit",
            help,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        y: u16,
        frame_w: u16,
    ) {
        let title = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        fb.put_str(start_x, y, "2048", title);

        let score = format!("SCORE {}", state.score());
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let x = start_x + frame_w.saturating_sub(score.chars().count() as u16);
        fb.put_str(x, y, &score, label);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: Tile,
    ) {
        let style = tile_style(value);
        let px = start_x + 1 + (col as u16) * self.cell_w;
        let py = start_y + 1 + (row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            let text = value.to_string();
            let tx = px + self.cell_w.saturating_sub(text.chars().count() as u16) / 2;
            let ty = py + self.cell_h / 2;
            fb.put_str(tx, ty, &text, style.bold());
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle::new(Rgb::new(255, 80, 80), Rgb::new(0, 0, 0)).bold();
        let mid_y = y + frame_h / 2;
        self.put_centered(fb, x, mid_y, frame_w, " GAME OVER ", style);

        let hint = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
        self.put_centered(fb, x, mid_y + 1, frame_w, " press r to restart ", hint);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, y, text, style);
    }
}

/// Fixed value-to-color lookup, converted from the classic 2048 palette.
///
/// Values above the tabulated range (past 2048) fall back to the dark
/// "super tile" style instead of failing.
fn tile_style(value: Tile) -> CellStyle {
    let (bg, dark_text) = match value {
        0 => (Rgb::new(205, 193, 180), true),
        2 => (Rgb::new(238, 228, 218), true),
        4 => (Rgb::new(237, 224, 200), true),
        8 => (Rgb::new(242, 177, 121), false),
        16 => (Rgb::new(245, 149, 99), false),
        32 => (Rgb::new(246, 124, 95), false),
        64 => (Rgb::new(246, 94, 59), false),
        128 => (Rgb::new(237, 207, 114), false),
        256 => (Rgb::new(237, 204, 97), false),
        512 => (Rgb::new(237, 200, 80), false),
        1024 => (Rgb::new(237, 197, 63), false),
        2048 => (Rgb::new(237, 194, 46), false),
        _ => (Rgb::new(60, 58, 50), false),
    };

    let fg = if dark_text {
        Rgb::new(119, 110, 101)
    } else {
        Rgb::new(249, 246, 242)
    };

    CellStyle::new(fg, bg)
}
