//! Input module - terminal events reduced to a pointer and game actions
//!
//! The game only needs "pointer position + did a click happen this frame"
//! plus a handful of discrete keys. Mouse events keep the pointer current;
//! a left-button press latches a click that the frame loop consumes once
//! per tick.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{GameAction, Point};

/// Pointer state accumulated between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pos: Point,
    clicked: bool,
}

impl Pointer {
    /// Track position on every mouse event; latch left-button presses.
    pub fn handle_mouse_event(&mut self, ev: MouseEvent) {
        self.pos = Point::new(ev.column as f32, ev.row as f32);
        if let MouseEventKind::Down(MouseButton::Left) = ev.kind {
            self.clicked = true;
        }
    }

    /// Current position in screen (terminal cell) coordinates.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Consume the click latch: returns the click position at most once
    /// per frame.
    pub fn take_click(&mut self) -> Option<Point> {
        if self.clicked {
            self.clicked = false;
            Some(self.pos)
        } else {
            None
        }
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::BackToMenu),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::ToggleGrid),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
