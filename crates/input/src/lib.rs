//! Terminal input module (game-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the single-character key alphabet the game
//! dispatches on, and decides which events end the session.

pub mod map;

pub use tui_rogue_types as types;

pub use map::{handle_key_event, should_quit};
