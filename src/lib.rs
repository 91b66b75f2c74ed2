//! TUI Memory - a terminal pair-matching card game.
//!
//! Face-down tiles are revealed two at a time with the mouse; matching
//! pairs fade out, mismatches flip back after a short delay and cost a
//! life. `core` is pure and deterministic; `term` renders into a diffed
//! framebuffer over crossterm; `input` reduces terminal events to a
//! pointer and discrete actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
