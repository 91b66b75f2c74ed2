//! Core module - pure game logic with no external dependencies
//!
//! Everything here is deterministic and I/O-free: tile animation, board
//! rules, pair resolution, and the round controller. Rendering and input
//! live in `term` and `input`.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod tile;

// Re-export commonly used types
pub use board::{Board, Selection};
pub use game_state::{GamePhase, GameState, Outcome};
pub use rng::SimpleRng;
pub use tile::{Tile, TilePhase};
