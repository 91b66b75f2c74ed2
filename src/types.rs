//! Core types shared across the application
//! This module contains pure data types and tunables with no external dependencies

/// Fixed frame cadence for the main loop (milliseconds).
pub const TICK_MS: u64 = 16;

/// A point in board-local units (one unit = one terminal cell).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy).
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// 24-bit RGB color with exact equality (pair matching compares these).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix this color toward `bg` by `alpha` (1.0 = fully this color,
    /// 0.0 = fully background). Used to render the fade-out animation.
    pub fn blend(self, bg: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = bg as f32 + (fg as f32 - bg as f32) * a;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, bg.r), mix(self.g, bg.g), mix(self.b, bg.b))
    }
}

/// Card front colors, in the order pairs are dealt from.
pub const DEFAULT_PALETTE: [Rgb; 6] = [
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 0),
];

/// All round tunables, threaded explicitly into `tick`/`update` rather than
/// living in ambient globals. Read once at round start; never persisted.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Board grid. `rows * cols` must be even.
    pub rows: u8,
    pub cols: u8,
    /// Flip animation rate in scale units per second (a full flip covers 2.0).
    pub flip_speed: f32,
    /// Fade animation rate in alpha units per second.
    pub fade_speed: f32,
    /// How long a mismatched pair stays open before flipping back (seconds).
    pub unflip_delay: f32,
    /// Mismatch budget; the round is lost when this reaches zero.
    pub starting_lives: u32,
    /// Card geometry in board-local units.
    pub card_w: f32,
    pub card_h: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    /// Front colors; the first `rows * cols / 2` entries are used, twice each.
    pub palette: Vec<Rgb>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            flip_speed: 6.5,
            fade_speed: 3.5,
            unflip_delay: 0.15,
            starting_lives: 3,
            card_w: 10.0,
            card_h: 5.0,
            gap_x: 2.0,
            gap_y: 1.0,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl GameConfig {
    /// Number of color pairs on the board.
    pub fn pair_count(&self) -> usize {
        (self.rows as usize * self.cols as usize) / 2
    }

    /// Total board extent in board-local units (no outer margin).
    pub fn level_size(&self) -> (f32, f32) {
        let cols = self.cols as f32;
        let rows = self.rows as f32;
        (
            cols * self.card_w + (cols - 1.0) * self.gap_x,
            rows * self.card_h + (rows - 1.0) * self.gap_y,
        )
    }
}

/// Discrete player actions outside of pointer clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Leave the menu and begin a round.
    Start,
    /// Rebuild the board with a fresh shuffle and play again.
    Restart,
    /// Back to the title screen.
    BackToMenu,
    /// Debug overlay toggle, handled by the view layer.
    ToggleGrid,
}

/// What the input layer should show for the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Hovering a selectable tile with room left in the selection.
    Pointer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(3.0, 4.0).offset(-1.0, 2.0);
        assert_eq!(p, Point::new(2.0, 6.0));
    }

    #[test]
    fn test_rgb_blend_extremes() {
        let fg = Rgb::new(200, 100, 0);
        let bg = Rgb::new(20, 20, 20);
        assert_eq!(fg.blend(bg, 1.0), fg);
        assert_eq!(fg.blend(bg, 0.0), bg);
    }

    #[test]
    fn test_rgb_blend_midpoint() {
        let fg = Rgb::new(100, 0, 200);
        let bg = Rgb::new(0, 0, 0);
        assert_eq!(fg.blend(bg, 0.5), Rgb::new(50, 0, 100));
    }

    #[test]
    fn test_level_size_default() {
        let cfg = GameConfig::default();
        let (w, h) = cfg.level_size();
        // 4 cards of 10 with 3 gaps of 2; 3 cards of 5 with 2 gaps of 1.
        assert_eq!(w, 46.0);
        assert_eq!(h, 17.0);
        assert_eq!(cfg.pair_count(), 6);
    }
}
