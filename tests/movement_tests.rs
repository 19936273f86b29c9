//! Movement tests - collision against the tile grid

use tui_rogue::core::{Game, GameConfig, Level, Map, MoveOutcome, SimpleRng};
use tui_rogue::types::{Position, RoomSpec, Tile, Wall};

const ROOM: RoomSpec = RoomSpec::new(Position::new(13, 13), 6, 8);

fn game_in_room(seed: u32, start: Position) -> Game {
    let mut rng = SimpleRng::new(seed);
    let mut level = Level::default();
    let map = Map::setup(1, &[ROOM], &mut rng, &mut level);
    Game::from_parts(level, map, start)
}

#[test]
fn test_move_right_onto_floor() {
    let mut game = game_in_room(1, Position::new(14, 14));
    assert_eq!(game.level().tile_at(Position::new(14, 15)), Tile::Floor);

    assert_eq!(game.handle_input('d'), MoveOutcome::Moved);
    assert_eq!(game.player().position(), Position::new(14, 15));
    assert_eq!(game.glyph_at(Position::new(14, 14)), '.');
    assert_eq!(game.glyph_at(Position::new(14, 15)), '@');
}

#[test]
fn test_move_into_wall_column_is_blocked() {
    for seed in 1..30 {
        // Pick an interior row whose right wall cell is not the door.
        let probe = game_in_room(seed, Position::new(14, 14));
        let door_row = probe.map().slot(0).unwrap().door(Wall::Right).unwrap().position.row;
        let row = if door_row == 14 { 15 } else { 14 };

        let start = Position::new(row, 19);
        let wall = Position::new(row, 20);
        let mut game = game_in_room(seed, start);
        assert_eq!(game.glyph_at(wall), '|');

        assert_eq!(game.handle_input('d'), MoveOutcome::Blocked);
        assert_eq!(game.player().position(), start);
        assert_eq!(game.glyph_at(wall), '|');
        assert_eq!(game.glyph_at(start), '@');
        assert_eq!(game.cursor(), start);
    }
}

#[test]
fn test_every_wall_and_door_blocks() {
    let mut game = game_in_room(5, Position::new(14, 14));
    let room = game.map().slot(0).unwrap().clone();

    // Walk every interior cell; any step out of the interior must fail.
    for row in 14..18 {
        for col in 14..20 {
            let here = Position::new(row, col);
            game.commit_move(here);
            for key in ['w', 'a', 's', 'd'] {
                let outcome = game.handle_input(key);
                let now = game.player().position();
                if room.interior_contains(now) && now != here {
                    assert_eq!(outcome, MoveOutcome::Moved);
                    game.commit_move(here);
                } else {
                    assert_eq!(outcome, MoveOutcome::Blocked, "left room at {here:?} via {key}");
                    assert_eq!(now, here);
                }
            }
        }
    }
    for door in room.doors() {
        assert_eq!(game.level().tile_at(door.position), Tile::Door);
    }
}

#[test]
fn test_unrecognized_keys_leave_player_alone() {
    let mut game = game_in_room(1, Position::new(14, 14));
    let level_before = game.level().clone();
    for key in ['q', 'Q', 'x', 'h', 'j', 'k', 'l', '\n', '\u{1b}'] {
        assert_eq!(game.handle_input(key), MoveOutcome::Ignored);
        assert_eq!(game.player().position(), Position::new(14, 14));
        assert_eq!(game.player().health(), 20);
    }
    assert_eq!(game.level(), &level_before);
}

#[test]
fn test_uppercase_moves_like_lowercase() {
    let mut game = game_in_room(1, Position::new(15, 15));
    assert_eq!(game.handle_input('W'), MoveOutcome::Moved);
    assert_eq!(game.handle_input('A'), MoveOutcome::Moved);
    assert_eq!(game.handle_input('S'), MoveOutcome::Moved);
    assert_eq!(game.handle_input('D'), MoveOutcome::Moved);
    assert_eq!(game.player().position(), Position::new(15, 15));
}

#[test]
fn test_blank_space_outside_rooms_blocks() {
    let mut rng = SimpleRng::new(1);
    let mut level = Level::default();
    let map = Map::setup(1, &[ROOM], &mut rng, &mut level);
    level.set(Position::new(2, 2), Tile::Floor);
    let mut game = Game::from_parts(level, map, Position::new(2, 2));

    for key in ['w', 'a', 's', 'd'] {
        assert_eq!(game.handle_input(key), MoveOutcome::Blocked);
    }
}

#[test]
fn test_doors_passable_config() {
    let mut config = GameConfig::seeded(1);
    config.doors_passable = true;
    let mut game = Game::new(&config, 80, 24);
    assert!(game.doors_passable());

    // Seed 1: first room's left door is at (16,13).
    let door = game.map().slot(0).unwrap().door(Wall::Left).unwrap().position;
    game.commit_move(door.offset(0, 1));
    assert_eq!(game.handle_input('a'), MoveOutcome::Moved);
    assert_eq!(game.player().position(), door);
}
