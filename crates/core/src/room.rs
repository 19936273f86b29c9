//! Room module - rectangular rooms with one random door per wall
//!
//! A room is an axis-aligned rectangle described by its top-left corner and
//! outer height/width. The outline is wall, the inside is floor, and each
//! wall gets one door at a random cell strictly between its two corners.
//!
//! Geometry is never validated. A wall whose span between corners is empty
//! simply gets no door, so a room carries between zero and four doors.

use std::ops::RangeInclusive;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::level::Level;
use crate::rng::SimpleRng;
use crate::types::{Position, RoomSpec, Tile, Wall};

/// A door opening on one wall of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Door {
    pub wall: Wall,
    pub position: Position,
}

/// An axis-aligned room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    top_left: Position,
    height: i32,
    width: i32,
    /// At most one door per wall, in top/bottom/left/right order.
    doors: ArrayVec<Door, 4>,
}

impl Room {
    /// Create a room and roll its doors.
    ///
    /// Walls are visited top, bottom, left, right; each draws one value from
    /// `rng` if it has a non-empty span between its corners.
    pub fn create(spec: RoomSpec, rng: &mut SimpleRng) -> Self {
        let RoomSpec {
            top_left,
            height,
            width,
        } = spec;
        let bottom = far_edge(top_left.row, height);
        let right = far_edge(top_left.col, width);
        let first_col = top_left.col.saturating_add(1);
        let first_row = top_left.row.saturating_add(1);
        let col_span = width.saturating_sub(2);
        let row_span = height.saturating_sub(2);

        let mut doors = ArrayVec::new();
        for wall in Wall::ALL {
            let position = match wall {
                Wall::Top => rng
                    .pick_in_span(first_col, col_span)
                    .map(|col| Position::new(top_left.row, col)),
                Wall::Bottom => rng
                    .pick_in_span(first_col, col_span)
                    .map(|col| Position::new(bottom, col)),
                Wall::Left => rng
                    .pick_in_span(first_row, row_span)
                    .map(|row| Position::new(row, top_left.col)),
                Wall::Right => rng
                    .pick_in_span(first_row, row_span)
                    .map(|row| Position::new(row, right)),
            };
            if let Some(position) = position {
                doors.push(Door { wall, position });
            }
        }

        debug!(
            row = top_left.row,
            col = top_left.col,
            height,
            width,
            doors = doors.len(),
            "room created"
        );

        Self {
            top_left,
            height,
            width,
            doors,
        }
    }

    pub fn top_left(&self) -> Position {
        self.top_left
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn spec(&self) -> RoomSpec {
        RoomSpec::new(self.top_left, self.height, self.width)
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// The door on `wall`, if that wall has one.
    pub fn door(&self, wall: Wall) -> Option<Door> {
        self.doors.iter().copied().find(|d| d.wall == wall)
    }

    fn bottom(&self) -> i32 {
        far_edge(self.top_left.row, self.height)
    }

    fn right(&self) -> i32 {
        far_edge(self.top_left.col, self.width)
    }

    /// Whether `pos` lies on the room's outline or inside it.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= self.top_left.row
            && pos.row <= self.bottom()
            && pos.col >= self.top_left.col
            && pos.col <= self.right()
    }

    /// Whether `pos` is a floor cell of this room (strictly inside the walls).
    pub fn interior_contains(&self, pos: Position) -> bool {
        pos.row > self.top_left.row
            && pos.row < self.bottom()
            && pos.col > self.top_left.col
            && pos.col < self.right()
    }

    /// Stamp the room onto `level`.
    ///
    /// Top and bottom rows are `-` across the full width, side columns are
    /// `|` over the interior rows, the interior is floor, and doors go last so
    /// they replace the wall beneath them. Cells outside the level are skipped.
    pub fn render(&self, level: &mut Level) {
        let top = self.top_left.row;
        let left = self.top_left.col;
        let bottom = self.bottom();
        let right = self.right();
        let (width, height) = (level.width(), level.height());

        for col in on_grid(left, right, width) {
            level.set(Position::new(top, col), Tile::WallHorizontal);
            level.set(Position::new(bottom, col), Tile::WallHorizontal);
        }

        let interior_cols = on_grid(left.saturating_add(1), right.saturating_sub(1), width);
        for row in on_grid(top.saturating_add(1), bottom.saturating_sub(1), height) {
            level.set(Position::new(row, left), Tile::WallVertical);
            level.set(Position::new(row, right), Tile::WallVertical);

            for col in interior_cols.clone() {
                level.set(Position::new(row, col), Tile::Floor);
            }
        }

        for door in &self.doors {
            level.set(door.position, Tile::Door);
        }
    }
}

/// Last cell of a run of `len` cells starting at `start`.
fn far_edge(start: i32, len: i32) -> i32 {
    start.saturating_add(len).saturating_sub(1)
}

/// `first..=last` cut down to the cells a grid axis of `size` can hold.
fn on_grid(first: i32, last: i32, size: u16) -> RangeInclusive<i32> {
    first.max(0)..=last.min(i32::from(size) - 1)
}
