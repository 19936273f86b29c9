//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the room model, the tile grid, and the movement
//! rules. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical door placement
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: Any front end can project the level onto its own surface
//!
//! # Module Structure
//!
//! - [`level`]: tile grid backing both collision and rendering
//! - [`room`]: rectangular rooms with one random door per wall
//! - [`map`]: fixed-capacity room slots filled from a layout
//! - [`player`]: player position and health
//! - [`game`]: input dispatch, collision check, committed moves
//! - [`rng`]: seeded LCG for door placement
//! - [`config`]: defaults and environment overrides
//!
//! # Rules
//!
//! - Only floor (`.`) is walkable; walls (`-`, `|`), doors (`+`), blank cells
//!   and off-grid cells block
//! - A blocked move leaves the player and the level untouched
//! - A committed move leaves floor behind on the vacated cell
//! - `q` ends a session; `Q` is just another ignored key
//!
//! # Example
//!
//! ```
//! use tui_rogue_core::{Game, GameConfig, MoveOutcome};
//! use tui_rogue_types::Position;
//!
//! let mut game = Game::new(&GameConfig::seeded(12345), 80, 24);
//! assert_eq!(game.player().position(), Position::new(14, 14));
//!
//! assert_eq!(game.handle_input('d'), MoveOutcome::Moved);
//! assert_eq!(game.player().position(), Position::new(14, 15));
//!
//! // Unknown keys are ignored.
//! assert_eq!(game.handle_input('x'), MoveOutcome::Ignored);
//! ```

pub mod config;
pub mod game;
pub mod level;
pub mod map;
pub mod player;
pub mod rng;
pub mod room;

pub use tui_rogue_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game::{Game, MoveOutcome, SessionEnd};
pub use level::Level;
pub use map::Map;
pub use player::Player;
pub use rng::SimpleRng;
pub use room::{Door, Room};
