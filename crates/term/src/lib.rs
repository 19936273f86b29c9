//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game is
//! projected into a framebuffer of styled cells, which is then flushed to the
//! terminal backend with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep projection (`GameView`) pure so it can be asserted on cell by cell
//! - Only rewrite what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_rogue_core as core;
pub use tui_rogue_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
