//! Game configuration.
//!
//! Everything has a default matching the classic hardcoded setup; a few knobs
//! can be overridden through environment variables:
//!
//! - `ROGUE_SEED`: door placement seed (default: derived from the wall clock)
//! - `ROGUE_ROOM_CAPACITY`: number of map slots (default: 6)
//! - `ROGUE_DOORS_PASSABLE`: set to "1" or "true" to let the player walk through doors
//! - `ROGUE_LOG_PATH`: write logs to this file (default: no logging)
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{
    Position, RoomSpec, DEFAULT_ROOM_CAPACITY, DEFAULT_ROOM_LAYOUT, PLAYER_START,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub room_capacity: usize,
    pub doors_passable: bool,
    pub log_path: Option<String>,
    /// Rooms placed at setup, in slot order.
    pub layout: Vec<RoomSpec>,
    pub player_start: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            room_capacity: DEFAULT_ROOM_CAPACITY,
            doors_passable: false,
            log_path: None,
            layout: DEFAULT_ROOM_LAYOUT.to_vec(),
            player_start: PLAYER_START,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same parsing as [`GameConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("ROGUE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let room_capacity = lookup("ROGUE_ROOM_CAPACITY")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.room_capacity);

        let doors_passable = lookup("ROGUE_DOORS_PASSABLE")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(defaults.doors_passable);

        let log_path = lookup("ROGUE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            room_capacity,
            doors_passable,
            log_path,
            ..defaults
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
