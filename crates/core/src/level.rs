//! Level module - the tile grid everything is drawn onto
//!
//! The level is the single source of truth for what occupies each cell.
//! Rooms stamp their walls, floors and doors into it, movement reads it back
//! to decide walkability, and the terminal view is a projection of it.
//! Coordinates: (row, col), row-major flat storage.

use crate::types::{Position, Tile, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// Row-major grid of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl Level {
    /// Create a blank level of `width` columns by `height` rows.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            tiles: vec![Tile::Blank; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        if pos.row >= self.height as i32 || pos.col >= self.width as i32 {
            return None;
        }
        Some((pos.row as usize) * (self.width as usize) + (pos.col as usize))
    }

    /// Tile at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|idx| self.tiles[idx])
    }

    /// Tile at `pos`, treating anything outside the grid as blank.
    pub fn tile_at(&self, pos: Position) -> Tile {
        self.get(pos).unwrap_or_default()
    }

    /// Set the tile at `pos`.
    /// Returns false if out of bounds (nothing is written).
    pub fn set(&mut self, pos: Position, tile: Tile) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Whether the cell holds floor. Off-grid cells never do.
    pub fn is_floor(&self, pos: Position) -> bool {
        self.tile_at(pos).is_floor()
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Blank);
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate `(position, tile)` over the whole grid, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.width as usize;
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            let pos = Position::new((idx / width) as i32, (idx % width) as i32);
            (pos, *tile)
        })
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}
