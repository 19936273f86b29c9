//! Game state - level, map, player and the movement rules
//!
//! Movement is decided by what the level holds at the destination: only a
//! floor tile accepts the player. Walls, doors, blank cells and anything off
//! the grid reject the move and leave the player in place. A floor tile is
//! walkable wherever it happens to be, inside a room or not.
//!
//! Doors are impassable under this rule. [`Game::with_doors_passable`]
//! lifts that restriction.

use tracing::trace;

use crate::config::GameConfig;
use crate::level::Level;
use crate::map::Map;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::types::{Direction, Position, Tile, PLAYER_GLYPH, QUIT_KEY};

/// Result of feeding one key to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto the destination.
    Moved,
    /// The destination was not walkable; the player stayed.
    Blocked,
    /// The key is not a movement key.
    Ignored,
}

/// Why a key-driven session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The quit key was read.
    Quit { moves: u32 },
    /// The key source ran dry before a quit key.
    InputClosed { moves: u32 },
}

#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    map: Map,
    player: Player,
    cursor: Position,
    doors_passable: bool,
    /// Tile restored under the player when it steps away.
    underfoot: Tile,
}

impl Game {
    /// Set up a full game on a `width` x `height` grid from `config`.
    pub fn new(config: &GameConfig, width: u16, height: u16) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let mut level = Level::new(width, height);
        let map = Map::setup(config.room_capacity, &config.layout, &mut rng, &mut level);
        Self::from_parts(level, map, config.player_start).with_doors_passable(config.doors_passable)
    }

    /// Place a player at `start` on an already-drawn level.
    ///
    /// The player is committed onto `start` immediately, which leaves floor
    /// on that cell and the cursor on the player.
    pub fn from_parts(level: Level, map: Map, start: Position) -> Self {
        let mut game = Self {
            level,
            map,
            player: Player::new(start),
            cursor: start,
            doors_passable: false,
            underfoot: Tile::Floor,
        };
        game.commit_move(start);
        game
    }

    pub fn with_doors_passable(mut self, doors_passable: bool) -> Self {
        self.doors_passable = doors_passable;
        self
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Where the terminal cursor should sit.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn doors_passable(&self) -> bool {
        self.doors_passable
    }

    /// The glyph shown at `pos`: the player on top of the level tiles.
    pub fn glyph_at(&self, pos: Position) -> char {
        if pos == self.player.position() {
            PLAYER_GLYPH
        } else {
            self.level.tile_at(pos).glyph()
        }
    }

    /// Dispatch one key. Movement keys (case-insensitive WASD) try a unit
    /// step; every other key changes nothing.
    pub fn handle_input(&mut self, key: char) -> MoveOutcome {
        match Direction::from_key(key) {
            Some(dir) => self.check_position(self.player.position().step(dir)),
            None => MoveOutcome::Ignored,
        }
    }

    /// Move onto `candidate` if it is walkable, otherwise stay put with the
    /// cursor back on the player.
    pub fn check_position(&mut self, candidate: Position) -> MoveOutcome {
        let tile = self.level.tile_at(candidate);
        let walkable = tile.is_floor() || (self.doors_passable && tile == Tile::Door);

        if walkable {
            self.commit_move(candidate);
            MoveOutcome::Moved
        } else {
            trace!(
                row = candidate.row,
                col = candidate.col,
                tile = ?tile,
                "move blocked"
            );
            self.cursor = self.player.position();
            MoveOutcome::Blocked
        }
    }

    /// Leave floor on the current cell, relocate the player to `destination`
    /// and put the cursor there. No walkability check.
    pub fn commit_move(&mut self, destination: Position) {
        self.level.set(self.player.position(), self.underfoot);

        self.underfoot = if self.doors_passable && self.level.tile_at(destination) == Tile::Door {
            Tile::Door
        } else {
            Tile::Floor
        };

        self.player.set_position(destination);
        self.cursor = destination;
    }

    /// Feed keys until the quit key is read or the source runs out.
    pub fn run_keys<I>(&mut self, keys: I) -> SessionEnd
    where
        I: IntoIterator<Item = char>,
    {
        let mut moves = 0u32;
        for key in keys {
            if key == QUIT_KEY {
                return SessionEnd::Quit { moves };
            }
            if self.handle_input(key) == MoveOutcome::Moved {
                moves += 1;
            }
        }
        SessionEnd::InputClosed { moves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;
    use crate::types::{RoomSpec, Wall};

    /// Single 6x8 room at (13,13) on a default-size level.
    fn single_room_game(seed: u32) -> Game {
        let mut rng = SimpleRng::new(seed);
        let mut level = Level::default();
        let spec = RoomSpec::new(Position::new(13, 13), 6, 8);
        let map = Map::setup(1, &[spec], &mut rng, &mut level);
        Game::from_parts(level, map, Position::new(14, 14))
    }

    #[test]
    fn setup_places_player_with_cursor() {
        let game = Game::new(&GameConfig::seeded(1), 80, 24);
        assert_eq!(game.player().position(), Position::new(14, 14));
        assert_eq!(game.player().health(), 20);
        assert_eq!(game.cursor(), Position::new(14, 14));
        assert_eq!(game.glyph_at(Position::new(14, 14)), '@');
        assert_eq!(game.level().tile_at(Position::new(14, 14)), Tile::Floor);
        assert_eq!(game.map().len(), 3);
    }

    #[test]
    fn floor_move_succeeds() {
        let mut game = single_room_game(1);
        assert_eq!(game.handle_input('d'), MoveOutcome::Moved);
        assert_eq!(game.player().position(), Position::new(14, 15));
        assert_eq!(game.glyph_at(Position::new(14, 14)), '.');
        assert_eq!(game.glyph_at(Position::new(14, 15)), '@');
        assert_eq!(game.cursor(), Position::new(14, 15));
    }

    #[test]
    fn wall_move_fails() {
        let mut game = single_room_game(1);
        // (13,14) is the top wall unless the top door landed there.
        let above = Position::new(13, 14);
        let expected = game.level().tile_at(above);
        assert_eq!(game.handle_input('w'), MoveOutcome::Blocked);
        assert_eq!(game.player().position(), Position::new(14, 14));
        assert_eq!(game.level().tile_at(above), expected);
        assert_eq!(game.cursor(), Position::new(14, 14));
    }

    #[test]
    fn unknown_key_changes_nothing() {
        let mut game = single_room_game(1);
        let before_level = game.level().clone();
        for key in ['x', 'Q', ' ', '1', 'e'] {
            assert_eq!(game.handle_input(key), MoveOutcome::Ignored);
        }
        assert_eq!(game.player().position(), Position::new(14, 14));
        assert_eq!(game.player().health(), 20);
        assert_eq!(game.level(), &before_level);
    }

    #[test]
    fn door_is_impassable_by_default() {
        let mut game = single_room_game(3);
        let door = game.map().slot(0).unwrap().door(Wall::Left).unwrap().position;
        let inside = door.offset(0, 1);
        game.commit_move(inside);

        assert_eq!(game.handle_input('a'), MoveOutcome::Blocked);
        assert_eq!(game.player().position(), inside);
        assert_eq!(game.level().tile_at(door), Tile::Door);
    }

    #[test]
    fn doors_passable_lets_player_through_and_keeps_the_door() {
        let mut game = single_room_game(3).with_doors_passable(true);
        let door = game.map().slot(0).unwrap().door(Wall::Left).unwrap().position;
        let inside = door.offset(0, 1);
        game.commit_move(inside);

        assert_eq!(game.handle_input('a'), MoveOutcome::Moved);
        assert_eq!(game.player().position(), door);
        // Outside the room is blank: still blocked.
        assert_eq!(game.handle_input('a'), MoveOutcome::Blocked);
        assert_eq!(game.handle_input('d'), MoveOutcome::Moved);
        assert_eq!(game.level().tile_at(door), Tile::Door);
    }

    #[test]
    fn off_grid_move_is_blocked() {
        let mut rng = SimpleRng::new(1);
        let mut level = Level::new(3, 3);
        let map = Map::setup(0, &[], &mut rng, &mut level);
        level.set(Position::new(0, 0), Tile::Floor);
        let mut game = Game::from_parts(level, map, Position::new(0, 0));

        assert_eq!(game.handle_input('w'), MoveOutcome::Blocked);
        assert_eq!(game.handle_input('a'), MoveOutcome::Blocked);
        assert_eq!(game.player().position(), Position::new(0, 0));
    }

    #[test]
    fn step_past_the_i32_edge_is_blocked() {
        let mut rng = SimpleRng::new(1);
        let mut level = Level::new(3, 3);
        let map = Map::setup(0, &[], &mut rng, &mut level);
        let edge = Position::new(0, i32::MAX);
        let mut game = Game::from_parts(level, map, edge);

        assert_eq!(game.handle_input('d'), MoveOutcome::Blocked);
        assert_eq!(game.player().position(), edge);
        assert_eq!(game.cursor(), edge);
    }

    #[test]
    fn start_cell_is_floor_whether_or_not_doors_pass() {
        let mut game = single_room_game(3);
        let door = game.map().slot(0).unwrap().door(Wall::Left).unwrap().position;
        let level = game.level().clone();
        let map = game.map().clone();

        for passable in [false, true] {
            game = Game::from_parts(level.clone(), map.clone(), door).with_doors_passable(passable);
            assert_eq!(game.level().tile_at(door), Tile::Floor);
            assert_eq!(game.handle_input('d'), MoveOutcome::Moved);
            assert_eq!(game.level().tile_at(door), Tile::Floor);
        }
    }

    #[test]
    fn stray_floor_outside_rooms_is_walkable() {
        let mut rng = SimpleRng::new(1);
        let mut level = Level::new(10, 10);
        let room = Room::create(RoomSpec::new(Position::new(0, 0), 3, 3), &mut rng);
        room.render(&mut level);
        level.set(Position::new(5, 5), Tile::Floor);
        level.set(Position::new(5, 6), Tile::Floor);
        let map = Map::with_capacity(1);
        let mut game = Game::from_parts(level, map, Position::new(5, 5));

        assert_eq!(game.handle_input('D'), MoveOutcome::Moved);
        assert_eq!(game.player().position(), Position::new(5, 6));
    }

    #[test]
    fn starting_on_a_wall_leaves_floor_behind() {
        let mut game = single_room_game(1);
        let wall = Position::new(15, 13);
        assert_ne!(game.level().tile_at(wall), Tile::Floor);
        game.commit_move(wall);
        game.commit_move(Position::new(16, 14));
        assert_eq!(game.level().tile_at(wall), Tile::Floor);
    }

    #[test]
    fn run_keys_stops_at_lowercase_q_only() {
        let mut game = single_room_game(1);
        let end = game.run_keys("dQdqd".chars());
        assert_eq!(end, SessionEnd::Quit { moves: 2 });
        assert_eq!(game.player().position(), Position::new(14, 16));
    }

    #[test]
    fn run_keys_reports_closed_input() {
        let mut game = single_room_game(1);
        let end = game.run_keys("sx".chars());
        assert_eq!(end, SessionEnd::InputClosed { moves: 1 });
    }
}
