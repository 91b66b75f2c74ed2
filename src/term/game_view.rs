//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Cards draw as filled rectangles whose width follows `|scale|` around the
//! card's vertical center line (the flip illusion) and whose color blends
//! toward the backdrop as alpha drops (the fade). The hovered selectable
//! card is lifted toward white - a terminal cannot change the OS pointer,
//! so the cursor hint becomes a highlight instead.

use crate::core::{GamePhase, GameState, Outcome, Tile};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::{CursorHint, GameConfig, Point, Rgb};

const BACKDROP: Rgb = Rgb::new(12, 12, 16);
const CARD_BACK: Rgb = Rgb::new(70, 70, 90);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const TEXT_DIM: Rgb = Rgb::new(130, 130, 140);
const GRID: Rgb = Rgb::new(50, 50, 60);
const HEART: Rgb = Rgb::new(220, 80, 80);

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

/// A lightweight terminal renderer for the memory game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    show_grid: bool,
}

impl GameView {
    /// Toggle the debug grid overlay behind the board.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Screen position of the board's top-left corner (board centered in
    /// the viewport). The frame loop uses this to map pointer coordinates
    /// into board-local space.
    pub fn board_origin(&self, cfg: &GameConfig, viewport: Viewport) -> Point {
        let (level_w, level_h) = cfg.level_size();
        let x = (viewport.width as f32 - level_w).max(0.0) / 2.0;
        let y = (viewport.height as f32 - level_h).max(0.0) / 2.0;
        Point::new(x.floor(), y.floor())
    }

    /// Render the current game state into a framebuffer.
    ///
    /// `pointer` is in screen (terminal cell) coordinates.
    pub fn render(&self, state: &GameState, viewport: Viewport, pointer: Point) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::colors(TEXT, BACKDROP).into_cell(' '));

        if self.show_grid {
            self.draw_grid(&mut fb);
        }

        match state.phase() {
            GamePhase::Menu => self.draw_menu(&mut fb, viewport),
            GamePhase::Playing => {
                self.draw_board(&mut fb, state, viewport, pointer);
                self.draw_side_panel(&mut fb, state, viewport);
            }
            GamePhase::Finished(outcome) => {
                self.draw_board(&mut fb, state, viewport, pointer);
                self.draw_outcome(&mut fb, viewport, outcome);
            }
        }

        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::colors(GRID, BACKDROP)
        };
        for y in (0..fb.height()).step_by(2) {
            for x in (0..fb.width()).step_by(4) {
                fb.put_char(x, y, '·', style);
            }
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let mid = viewport.height / 2;
        self.draw_centered(fb, viewport, mid.saturating_sub(2), "CARDS MEMORY GAME", TEXT, true);
        self.draw_centered(
            fb,
            viewport,
            mid,
            "click or press enter to start",
            TEXT,
            false,
        );
        self.draw_centered(fb, viewport, mid + 2, "q quits · g toggles grid", TEXT_DIM, false);
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        pointer: Point,
    ) {
        let origin = self.board_origin(state.config(), viewport);
        let local = pointer.offset(-origin.x, -origin.y);
        let hint = state.cursor_hint(local);

        for tile in state.board().tiles() {
            let hovered = hint == CursorHint::Pointer && tile.is_closed() && tile.contains(local);
            self.draw_card(fb, origin, tile, hovered);
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, origin: Point, tile: &Tile, hovered: bool) {
        let shown_w = (tile.scale().abs() * tile.width()).round();
        if shown_w < 1.0 {
            // Edge-on mid-flip: nothing to draw this frame.
            return;
        }

        let center_x = origin.x + tile.pos().x + tile.width() / 2.0;
        let left = (center_x - shown_w / 2.0).round().max(0.0) as u16;
        let top = (origin.y + tile.pos().y).round().max(0.0) as u16;

        let mut face = if tile.shows_front() {
            tile.front()
        } else {
            CARD_BACK
        };
        if hovered {
            face = Rgb::new(255, 255, 255).blend(face, 0.3);
        }
        let color = face.blend(BACKDROP, tile.alpha());

        let style = CellStyle::colors(color, color);
        fb.fill_rect(
            left,
            top,
            shown_w as u16,
            tile.height().round() as u16,
            ' ',
            style,
        );
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let origin = self.board_origin(state.config(), viewport);
        let (level_w, _) = state.config().level_size();
        let panel_x = (origin.x + level_w).round() as u16 + 4;
        if panel_x + 8 >= viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::colors(TEXT, BACKDROP)
        };
        let value = CellStyle::colors(TEXT, BACKDROP);
        let hearts = CellStyle::colors(HEART, BACKDROP);

        let mut y = origin.y.round() as u16;
        fb.put_str(panel_x, y, "LIVES", label);
        y = y.saturating_add(1);
        let lives = "♥ ".repeat(state.board().lives() as usize);
        fb.put_str(panel_x, y, lives.trim_end(), hearts);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            &format!("{} left", state.board().live_count() / 2),
            value,
        );
    }

    fn draw_outcome(&self, fb: &mut FrameBuffer, viewport: Viewport, outcome: Outcome) {
        let mid = viewport.height / 2;
        let title = match outcome {
            Outcome::Won => "YOU ARE THE WINNER!",
            Outcome::Lost => "GAME OVER!",
        };
        self.draw_centered(fb, viewport, mid.saturating_sub(1), title, TEXT, true);

        let prompt = match outcome {
            Outcome::Won => "r play again · m menu",
            Outcome::Lost => "r try again · m menu",
        };
        self.draw_centered(fb, viewport, mid + 1, prompt, TEXT_DIM, false);
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        y: u16,
        text: &str,
        fg: Rgb,
        bold: bool,
    ) {
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let style = CellStyle {
            bold,
            ..CellStyle::colors(fg, BACKDROP)
        };
        fb.put_str(x, y, text, style);
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::term::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::term::fb::Cell {
        crate::term::fb::Cell { ch, style: self }
    }
}
