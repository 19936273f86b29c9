//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs, matching how a terminal addresses cells:
//!
//! - **row**: 0 is the top line of the screen, growing downwards
//! - **col**: 0 is the leftmost column, growing to the right
//!
//! Both are `i32` so that geometry arithmetic may leave the grid without
//! wrapping; anything outside the grid simply reads back as "nothing drawn".
//!
//! # Glyphs
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | `.` | Floor (the only walkable tile) |
//! | `-` | Horizontal wall (top/bottom rows of a room) |
//! | `\|` | Vertical wall (left/right columns of a room) |
//! | `+` | Door |
//! | `@` | Player |
//!
//! # Default Layout
//!
//! Three hardcoded rooms are placed into a map with six slots:
//!
//! | Top-left | Height | Width |
//! |----------|--------|-------|
//! | (13, 13) | 6 | 8 |
//! | (2, 40) | 6 | 8 |
//! | (10, 40) | 6 | 12 |
//!
//! The player starts at (14, 14), one cell inside the first room, with 20 health.
//!
//! # Examples
//!
//! ```
//! use tui_rogue_types::{Direction, Position, Tile};
//!
//! let start = Position::new(14, 14);
//! let dir = Direction::from_key('d').unwrap();
//! assert_eq!(start.step(dir), Position::new(14, 15));
//!
//! assert_eq!(Tile::from_glyph('.'), Some(Tile::Floor));
//! assert!(Tile::Floor.is_floor());
//! assert!(!Tile::Door.is_floor());
//! ```

/// Floor glyph.
pub const FLOOR_GLYPH: char = '.';

/// Glyph for the top and bottom rows of a room.
pub const WALL_HORIZONTAL_GLYPH: char = '-';

/// Glyph for the left and right columns of a room.
pub const WALL_VERTICAL_GLYPH: char = '|';

/// Door glyph.
pub const DOOR_GLYPH: char = '+';

/// Player glyph.
pub const PLAYER_GLYPH: char = '@';

/// Banner printed at the top-left of the screen on startup.
pub const BANNER: &str = "Hello world";

/// Quit key. Case-sensitive: `Q` is not a quit key.
pub const QUIT_KEY: char = 'q';

/// Player health at setup.
pub const PLAYER_START_HEALTH: i32 = 20;

/// Player start position (one cell inside the first default room).
pub const PLAYER_START: Position = Position::new(14, 14);

/// Number of room slots the map is set up with by default.
pub const DEFAULT_ROOM_CAPACITY: usize = 6;

/// Grid size used when the terminal size cannot be queried.
pub const DEFAULT_GRID_WIDTH: u16 = 80;
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// The hardcoded room list.
///
/// This is independent of the map capacity on purpose: the capacity only
/// decides how many slots exist, never which rooms are placed.
pub const DEFAULT_ROOM_LAYOUT: [RoomSpec; 3] = [
    RoomSpec::new(Position::new(13, 13), 6, 8),
    RoomSpec::new(Position::new(2, 40), 6, 8),
    RoomSpec::new(Position::new(10, 40), 6, 12),
];

/// A cell address on the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by a `(d_row, d_col)` delta, saturating at the `i32` edges.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// The neighbouring cell in `dir`.
    pub const fn step(self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.delta();
        self.offset(d_row, d_col)
    }
}

/// Movement directions (unit step in one axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a movement key to a direction (case-insensitive WASD).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_rogue_types::Direction;
    ///
    /// assert_eq!(Direction::from_key('w'), Some(Direction::Up));
    /// assert_eq!(Direction::from_key('S'), Some(Direction::Down));
    /// assert_eq!(Direction::from_key('q'), None);
    /// ```
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' | 'W' => Some(Direction::Up),
            's' | 'S' => Some(Direction::Down),
            'a' | 'A' => Some(Direction::Left),
            'd' | 'D' => Some(Direction::Right),
            _ => None,
        }
    }

    /// `(d_row, d_col)` for one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One of the four walls of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    /// Walls in door placement order.
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wall::Top => "top",
            Wall::Bottom => "bottom",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }
}

/// What a grid cell holds.
///
/// `Blank` is a cell nothing was ever drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Blank,
    Floor,
    WallHorizontal,
    WallVertical,
    Door,
}

impl Tile {
    pub const fn glyph(self) -> char {
        match self {
            Tile::Blank => ' ',
            Tile::Floor => FLOOR_GLYPH,
            Tile::WallHorizontal => WALL_HORIZONTAL_GLYPH,
            Tile::WallVertical => WALL_VERTICAL_GLYPH,
            Tile::Door => DOOR_GLYPH,
        }
    }

    /// Reverse of [`Tile::glyph`]. Unknown glyphs (including `@`) return `None`.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Tile::Blank),
            FLOOR_GLYPH => Some(Tile::Floor),
            WALL_HORIZONTAL_GLYPH => Some(Tile::WallHorizontal),
            WALL_VERTICAL_GLYPH => Some(Tile::WallVertical),
            DOOR_GLYPH => Some(Tile::Door),
            _ => None,
        }
    }

    pub const fn is_floor(self) -> bool {
        matches!(self, Tile::Floor)
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::WallHorizontal | Tile::WallVertical)
    }
}

/// Placement data for one room: top-left corner and outer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomSpec {
    pub top_left: Position,
    pub height: i32,
    pub width: i32,
}

impl RoomSpec {
    pub const fn new(top_left: Position, height: i32, width: i32) -> Self {
        Self {
            top_left,
            height,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_hardcoded_rooms() {
        assert_eq!(DEFAULT_ROOM_LAYOUT.len(), 3);
        assert_eq!(DEFAULT_ROOM_LAYOUT[0], RoomSpec::new(Position::new(13, 13), 6, 8));
        assert_eq!(DEFAULT_ROOM_LAYOUT[1], RoomSpec::new(Position::new(2, 40), 6, 8));
        assert_eq!(DEFAULT_ROOM_LAYOUT[2], RoomSpec::new(Position::new(10, 40), 6, 12));
        assert_eq!(DEFAULT_ROOM_CAPACITY, 6);
    }

    #[test]
    fn player_start_is_inside_first_room_interior() {
        let room = DEFAULT_ROOM_LAYOUT[0];
        assert!(PLAYER_START.row > room.top_left.row);
        assert!(PLAYER_START.row < room.top_left.row + room.height - 1);
        assert!(PLAYER_START.col > room.top_left.col);
        assert!(PLAYER_START.col < room.top_left.col + room.width - 1);
    }

    #[test]
    fn movement_keys_are_case_insensitive() {
        for (lower, upper, dir) in [
            ('w', 'W', Direction::Up),
            ('s', 'S', Direction::Down),
            ('a', 'A', Direction::Left),
            ('d', 'D', Direction::Right),
        ] {
            assert_eq!(Direction::from_key(lower), Some(dir));
            assert_eq!(Direction::from_key(upper), Some(dir));
        }
        assert_eq!(Direction::from_key('x'), None);
        assert_eq!(Direction::from_key(QUIT_KEY), None);
    }

    #[test]
    fn step_is_a_unit_move_in_one_axis() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(4, 5));
        assert_eq!(p.step(Direction::Down), Position::new(6, 5));
        assert_eq!(p.step(Direction::Left), Position::new(5, 4));
        assert_eq!(p.step(Direction::Right), Position::new(5, 6));
    }

    #[test]
    fn tile_glyphs_round_trip() {
        for tile in [
            Tile::Blank,
            Tile::Floor,
            Tile::WallHorizontal,
            Tile::WallVertical,
            Tile::Door,
        ] {
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
        assert_eq!(Tile::from_glyph(PLAYER_GLYPH), None);
    }

    #[test]
    fn only_floor_is_floor() {
        assert!(Tile::Floor.is_floor());
        assert!(!Tile::Blank.is_floor());
        assert!(!Tile::Door.is_floor());
        assert!(Tile::WallHorizontal.is_wall());
        assert!(Tile::WallVertical.is_wall());
        assert!(!Tile::Door.is_wall());
    }
}
