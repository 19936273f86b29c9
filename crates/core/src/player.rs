//! Player state.

use crate::types::{Position, PLAYER_START_HEALTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    position: Position,
    health: i32,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: PLAYER_START_HEALTH,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Only the game's committed moves may relocate the player.
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
