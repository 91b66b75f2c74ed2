//! Game state module - the round controller
//!
//! Owns the board and the menu/playing/finished phase, and exposes the
//! single per-frame entry point `tick(dt, click)`. Phase moves one way
//! within a round (Menu -> Playing -> Finished); restarting deals a fresh
//! board from the carried RNG so consecutive rounds differ.

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{CursorHint, GameAction, GameConfig, Point};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board was emptied before lives ran out.
    Won,
    /// Lives reached zero with tiles remaining.
    Lost,
}

/// Where the player is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    Finished(Outcome),
}

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    board: Board,
    phase: GamePhase,
}

impl GameState {
    /// Create a session on the menu screen with a board already dealt.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new(&config, &mut rng);
        Self {
            config,
            rng,
            board,
            phase: GamePhase::Menu,
        }
    }

    /// Leave the menu and play the dealt board. No-op once playing.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Menu {
            self.phase = GamePhase::Playing;
        }
    }

    /// Deal a fresh board (new shuffle, full lives) and play it.
    pub fn restart(&mut self) {
        self.board = Board::new(&self.config, &mut self.rng);
        self.phase = GamePhase::Playing;
    }

    /// Deal a fresh board and return to the menu.
    pub fn back_to_menu(&mut self) {
        self.board = Board::new(&self.config, &mut self.rng);
        self.phase = GamePhase::Menu;
    }

    /// One frame: forward the click (if any) to the board, advance all
    /// animations, then check the terminal conditions.
    ///
    /// `dt` is the elapsed time in seconds since the previous tick.
    /// Non-positive deltas are clamped to zero - some platforms report a
    /// zero or negative delta on the first frame after an interaction, and
    /// animation must never run backward.
    pub fn tick(&mut self, dt: f32, click: Option<Point>) {
        let dt = dt.max(0.0);
        if self.phase != GamePhase::Playing {
            return;
        }

        if let Some(point) = click {
            self.board.handle_select(point);
        }
        self.board.update(dt, &self.config);

        if self.board.is_won() {
            self.phase = GamePhase::Finished(Outcome::Won);
        } else if self.board.is_lost() {
            self.phase = GamePhase::Finished(Outcome::Lost);
        }
    }

    /// Apply a discrete player action. `ToggleGrid` belongs to the view
    /// layer and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
            GameAction::BackToMenu => self.back_to_menu(),
            GameAction::ToggleGrid => {}
        }
    }

    /// Cursor feedback for the input layer: a pointer hand iff hovering a
    /// selectable closed tile while fewer than two are selected.
    pub fn cursor_hint(&self, pointer: Point) -> CursorHint {
        if self.phase == GamePhase::Playing && self.board.hovers_selectable(pointer) {
            CursorHint::Pointer
        } else {
            CursorHint::Default
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
