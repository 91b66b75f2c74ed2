//! Board module - live tiles, selection, and pair resolution
//!
//! The board owns the tiles in creation order (a stable scan order for
//! click handling), the current selection, the mismatch countdown, and the
//! remaining lives. Resolution is driven from `update`: once both selected
//! tiles have settled open, the pair is either a match (fade both out, then
//! remove them) or a mismatch (hold them open for the configured delay,
//! then flip both back and charge a life).
//!
//! The selection is a three-state enum rather than a list, so "never more
//! than two selected" holds by construction.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::core::tile::Tile;
use crate::types::{GameConfig, Point};

/// The 0..=2 tiles currently chosen, in click order. Holds indices into the
/// live tile vector; tiles are only removed in the same step that clears
/// the selection, so held indices never dangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    One(usize),
    Two(usize, usize),
}

impl Selection {
    pub fn len(&self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::One(_) => 1,
            Selection::Two(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Selected indices in click order.
    pub fn indices(&self) -> ArrayVec<usize, 2> {
        let mut out = ArrayVec::new();
        match *self {
            Selection::Empty => {}
            Selection::One(a) => out.push(a),
            Selection::Two(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
        out
    }
}

/// The playing field for one round.
#[derive(Debug, Clone)]
pub struct Board {
    /// Live tiles in creation (grid) order. Matched tiles get removed.
    tiles: Vec<Tile>,
    selection: Selection,
    /// Countdown until a mismatched pair flips back (seconds).
    unflip_timer: f32,
    /// Remaining mismatch budget.
    lives: u32,
}

impl Board {
    /// Deal a fresh board: `rows x cols` tiles on a grid, the first
    /// `rows * cols / 2` palette colors twice each, shuffled by `rng`.
    pub fn new(cfg: &GameConfig, rng: &mut SimpleRng) -> Self {
        let count = cfg.rows as usize * cfg.cols as usize;
        assert!(count % 2 == 0, "board must hold an even number of tiles");
        assert!(
            cfg.palette.len() >= cfg.pair_count(),
            "palette too small: {} colors for {} pairs",
            cfg.palette.len(),
            cfg.pair_count()
        );

        let mut fronts = Vec::with_capacity(count);
        for color in cfg.palette.iter().take(cfg.pair_count()) {
            fronts.push(*color);
            fronts.push(*color);
        }
        rng.shuffle(&mut fronts);

        let mut tiles = Vec::with_capacity(count);
        for row in 0..cfg.rows {
            for col in 0..cfg.cols {
                let pos = Point::new(
                    col as f32 * (cfg.card_w + cfg.gap_x),
                    row as f32 * (cfg.card_h + cfg.gap_y),
                );
                let front = fronts[tiles.len()];
                tiles.push(Tile::new(pos, front, cfg));
            }
        }

        Self {
            tiles,
            selection: Selection::Empty,
            unflip_timer: cfg.unflip_delay,
            lives: cfg.starting_lives,
        }
    }

    /// Handle a click at `point` (board-local units).
    ///
    /// Selects the first tile in creation order whose box contains the
    /// point and whose phase is exactly `Closed` - any animating tile,
    /// including one still flipping back after a mismatch, ignores clicks.
    /// At most one tile is selected per call. Returns whether a tile was
    /// selected.
    pub fn handle_select(&mut self, point: Point) -> bool {
        let first = match self.selection {
            Selection::Two(_, _) => return false,
            Selection::Empty => None,
            Selection::One(idx) => Some(idx),
        };

        for (idx, tile) in self.tiles.iter_mut().enumerate() {
            if !tile.is_closed() || !tile.contains(point) {
                continue;
            }
            // A selected tile is flipping or open, never Closed.
            debug_assert!(first != Some(idx));

            tile.request_flip_open();
            self.selection = match first {
                None => Selection::One(idx),
                Some(f) => Selection::Two(f, idx),
            };
            return true;
        }

        false
    }

    /// Advance all animations by `dt` seconds, then resolve the selected
    /// pair if both tiles have settled out of their flip.
    pub fn update(&mut self, dt: f32, cfg: &GameConfig) {
        for tile in &mut self.tiles {
            tile.update(dt, cfg);
        }

        let Selection::Two(a, b) = self.selection else {
            return;
        };
        if self.tiles[a].is_flipping() || self.tiles[b].is_flipping() {
            return;
        }

        if self.tiles[a].front() == self.tiles[b].front() {
            self.resolve_match(a, b);
        } else {
            self.resolve_mismatch(dt, a, b, cfg);
        }
    }

    /// Match path: fade both tiles, and once both have fully faded, drop
    /// them from the live set and clear the selection.
    fn resolve_match(&mut self, a: usize, b: usize) {
        if self.tiles[a].is_removed() && self.tiles[b].is_removed() {
            debug_assert_eq!(self.tiles[a].front(), self.tiles[b].front());
            self.selection = Selection::Empty;
            self.tiles.retain(|t| !t.is_removed());
        } else {
            // Idempotent; repeated every frame until both reach alpha 0.
            self.tiles[a].request_fade_out();
            self.tiles[b].request_fade_out();
        }
    }

    /// Mismatch path: keep the pair open while the countdown runs, then
    /// flip both back, clear the selection, and charge one life. The
    /// selection clears immediately - the player sees both tiles closing,
    /// and clicks against them are rejected until they settle closed.
    fn resolve_mismatch(&mut self, dt: f32, a: usize, b: usize, cfg: &GameConfig) {
        self.unflip_timer -= dt;
        if self.unflip_timer > 0.0 {
            return;
        }

        self.tiles[a].request_flip_closed();
        self.tiles[b].request_flip_closed();
        self.selection = Selection::Empty;
        self.unflip_timer = cfg.unflip_delay;
        self.lives = self.lives.saturating_sub(1);
    }

    /// True when every pair has been matched away.
    pub fn is_won(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True when the mismatch budget ran out with tiles still on the board.
    pub fn is_lost(&self) -> bool {
        self.lives == 0 && !self.tiles.is_empty()
    }

    /// Whether `point` hovers a tile that a click would select right now.
    pub fn hovers_selectable(&self, point: Point) -> bool {
        self.selection.len() < 2 && self.tiles.iter().any(|t| t.is_closed() && t.contains(point))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn live_count(&self) -> usize {
        self.tiles.len()
    }
}
