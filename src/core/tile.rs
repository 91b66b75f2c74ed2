//! Tile module - one card on the board
//!
//! A tile owns its flip and fade animation as an explicit phase machine.
//! The flip is encoded as a scale in [-1, 1]: +1 is the fully closed back
//! face, -1 the fully open front face, and the rendered card width follows
//! `|scale|` so the card appears to turn around its vertical center line.
//! Fade is an alpha in [0, 1]; a tile that reaches alpha 0 is `Removed`
//! and gets dropped from the board's live set.
//!
//! Animation rates come from `GameConfig`; the phase only supplies the
//! direction of integration, so a boundary crossing transitions the phase
//! exactly once and illegal combinations (e.g. fading while closed) are
//! unrepresentable.

use crate::types::{GameConfig, Point, Rgb};

/// Lifecycle phase of a tile. Transitions:
///
/// `Closed -> FlippingOpen -> Open -> FlippingClosed -> Closed` (mismatch)
/// `Open -> FadingOut -> Removed` (match)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePhase {
    Closed,
    FlippingOpen,
    Open,
    FlippingClosed,
    FadingOut,
    Removed,
}

/// One card: position, front color, and animation state.
#[derive(Debug, Clone)]
pub struct Tile {
    pos: Point,
    width: f32,
    height: f32,
    front: Rgb,
    phase: TilePhase,
    scale: f32,
    alpha: f32,
}

impl Tile {
    /// Create a closed, fully visible tile.
    pub fn new(pos: Point, front: Rgb, cfg: &GameConfig) -> Self {
        Self {
            pos,
            width: cfg.card_w,
            height: cfg.card_h,
            front,
            phase: TilePhase::Closed,
            scale: 1.0,
            alpha: 1.0,
        }
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Callers guarantee `dt >= 0` (the round controller clamps frame
    /// deltas); the tile itself does not re-check.
    pub fn update(&mut self, dt: f32, cfg: &GameConfig) {
        match self.phase {
            TilePhase::FlippingOpen => {
                self.scale -= cfg.flip_speed * dt;
                if self.scale <= -1.0 {
                    self.scale = -1.0;
                    self.phase = TilePhase::Open;
                }
            }
            TilePhase::FlippingClosed => {
                self.scale += cfg.flip_speed * dt;
                if self.scale >= 1.0 {
                    self.scale = 1.0;
                    self.phase = TilePhase::Closed;
                }
            }
            TilePhase::FadingOut => {
                self.alpha -= cfg.fade_speed * dt;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    self.phase = TilePhase::Removed;
                }
            }
            TilePhase::Closed | TilePhase::Open | TilePhase::Removed => {}
        }
    }

    /// Start (or continue) turning toward the front face.
    /// No-op once the tile is open or on its way out.
    pub fn request_flip_open(&mut self) {
        if matches!(self.phase, TilePhase::Closed | TilePhase::FlippingClosed) {
            self.phase = TilePhase::FlippingOpen;
        }
    }

    /// Start (or continue) turning back toward the back face.
    pub fn request_flip_closed(&mut self) {
        if matches!(self.phase, TilePhase::Open | TilePhase::FlippingOpen) {
            self.phase = TilePhase::FlippingClosed;
        }
    }

    /// Begin fading out. Irreversible: a faded tile is removed, never
    /// redisplayed, so there is no fade-in path. Idempotent while fading.
    pub fn request_fade_out(&mut self) {
        if self.phase == TilePhase::Open {
            self.phase = TilePhase::FadingOut;
        }
    }

    pub fn phase(&self) -> TilePhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == TilePhase::Closed
    }

    pub fn is_open(&self) -> bool {
        self.phase == TilePhase::Open
    }

    pub fn is_removed(&self) -> bool {
        self.phase == TilePhase::Removed
    }

    /// True while the flip animation is in flight (either direction).
    pub fn is_flipping(&self) -> bool {
        matches!(
            self.phase,
            TilePhase::FlippingOpen | TilePhase::FlippingClosed
        )
    }

    /// True while any animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.is_flipping() || self.phase == TilePhase::FadingOut
    }

    /// Which face the renderer should show right now.
    pub fn shows_front(&self) -> bool {
        self.scale < 0.0
    }

    /// Axis-aligned containment test in board-local units.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.width
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.height
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn front(&self) -> Rgb {
        self.front
    }

    /// Flip progress in [-1, 1]; the rendered width is `|scale| * width`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Visibility in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn tile() -> Tile {
        Tile::new(Point::new(10.0, 5.0), Rgb::new(0, 0, 255), &cfg())
    }

    fn run(t: &mut Tile, seconds: f32) {
        let mut left = seconds;
        while left > 0.0 {
            t.update(0.016, &cfg());
            left -= 0.016;
        }
    }

    #[test]
    fn test_new_tile_is_closed_and_visible() {
        let t = tile();
        assert_eq!(t.phase(), TilePhase::Closed);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.alpha(), 1.0);
        assert!(!t.is_animating());
        assert!(!t.shows_front());
    }

    #[test]
    fn test_flip_open_settles_at_front_face() {
        let mut t = tile();
        t.request_flip_open();
        assert_eq!(t.phase(), TilePhase::FlippingOpen);

        run(&mut t, 1.0);
        assert_eq!(t.phase(), TilePhase::Open);
        assert_eq!(t.scale(), -1.0);
        assert!(t.shows_front());
        assert!(!t.is_animating());
    }

    #[test]
    fn test_scale_stays_in_bounds_throughout() {
        let mut t = tile();
        t.request_flip_open();
        for _ in 0..200 {
            t.update(0.016, &cfg());
            assert!((-1.0..=1.0).contains(&t.scale()));
        }
        t.request_flip_closed();
        for _ in 0..200 {
            t.update(0.016, &cfg());
            assert!((-1.0..=1.0).contains(&t.scale()));
        }
    }

    #[test]
    fn test_boundary_transitions_exactly_once() {
        let mut t = tile();
        t.request_flip_open();
        // A huge dt overshoots the boundary in a single step.
        t.update(10.0, &cfg());
        assert_eq!(t.phase(), TilePhase::Open);

        // Further updates leave the settled state alone.
        t.update(10.0, &cfg());
        assert_eq!(t.phase(), TilePhase::Open);
        assert_eq!(t.scale(), -1.0);
    }

    #[test]
    fn test_flip_reversal_mid_animation() {
        let mut t = tile();
        t.request_flip_open();
        t.update(0.016, &cfg());
        let partway = t.scale();
        assert!(partway < 1.0 && partway > -1.0);

        t.request_flip_closed();
        run(&mut t, 1.0);
        assert_eq!(t.phase(), TilePhase::Closed);
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn test_fade_out_only_from_open() {
        let mut t = tile();
        t.request_fade_out();
        assert_eq!(t.phase(), TilePhase::Closed);

        t.request_flip_open();
        run(&mut t, 1.0);
        t.request_fade_out();
        assert_eq!(t.phase(), TilePhase::FadingOut);

        // Idempotent while fading; alpha monotonically drops to zero.
        t.request_fade_out();
        run(&mut t, 1.0);
        assert_eq!(t.phase(), TilePhase::Removed);
        assert_eq!(t.alpha(), 0.0);
    }

    #[test]
    fn test_alpha_stays_in_bounds() {
        let mut t = tile();
        t.request_flip_open();
        run(&mut t, 1.0);
        t.request_fade_out();
        for _ in 0..200 {
            t.update(0.016, &cfg());
            assert!((0.0..=1.0).contains(&t.alpha()));
        }
    }

    #[test]
    fn test_removed_is_terminal() {
        let mut t = tile();
        t.request_flip_open();
        run(&mut t, 1.0);
        t.request_fade_out();
        run(&mut t, 1.0);
        assert!(t.is_removed());

        t.request_flip_open();
        t.request_flip_closed();
        t.request_fade_out();
        t.update(1.0, &cfg());
        assert!(t.is_removed());
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut t = tile();
        t.request_flip_open();
        t.update(0.0, &cfg());
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.phase(), TilePhase::FlippingOpen);
    }

    #[test]
    fn test_contains() {
        let t = tile(); // at (10, 5), 10x5 by default config
        assert!(t.contains(Point::new(10.0, 5.0)));
        assert!(t.contains(Point::new(20.0, 10.0)));
        assert!(t.contains(Point::new(15.0, 7.5)));
        assert!(!t.contains(Point::new(9.9, 5.0)));
        assert!(!t.contains(Point::new(15.0, 10.1)));
    }
}
