//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a simple
//! framebuffer, and the renderer flushes it to the terminal with
//! diff-based redraws. Keeps `core` free of any I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
