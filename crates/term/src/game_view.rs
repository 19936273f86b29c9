//! GameView: projects `core::Game` onto a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Level cells map one-to-one onto terminal cells: level `(row, col)` is
//! framebuffer `(x = col, y = row)`. Draw order is banner, then every
//! non-blank tile, then the player, so rooms cover the banner where they
//! overlap and the player covers the tile it stands on.

use crate::core::Game;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, Tile, BANNER, PLAYER_GLYPH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Styles for each kind of glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub banner: CellStyle,
    pub floor: CellStyle,
    pub wall: CellStyle,
    pub door: CellStyle,
    pub player: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            banner: CellStyle::default(),
            floor: CellStyle::fg(Rgb::new(120, 120, 130)).dim(),
            wall: CellStyle::fg(Rgb::new(200, 200, 200)),
            door: CellStyle::fg(Rgb::new(205, 150, 70)).bold(),
            player: CellStyle::fg(Rgb::new(250, 230, 90)).bold(),
        }
    }
}

/// A lightweight terminal renderer for the dungeon.
#[derive(Debug, Clone)]
pub struct GameView {
    palette: Palette,
    show_banner: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView {
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            show_banner: true,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Render the game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if self.show_banner {
            fb.put_str(0, 0, BANNER, self.palette.banner);
        }

        for (pos, tile) in game.level().iter() {
            if tile == Tile::Blank {
                continue;
            }
            self.put_at(fb, pos, tile.glyph(), self.tile_style(tile));
        }

        self.put_at(fb, game.player().position(), PLAYER_GLYPH, self.palette.player);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    /// Terminal cursor cell for `game`, if it falls inside the viewport.
    pub fn cursor(&self, game: &Game, viewport: Viewport) -> Option<(u16, u16)> {
        to_screen(game.cursor())
            .filter(|&(x, y)| x < viewport.width && y < viewport.height)
    }

    fn tile_style(&self, tile: Tile) -> CellStyle {
        match tile {
            Tile::Floor => self.palette.floor,
            Tile::WallHorizontal | Tile::WallVertical => self.palette.wall,
            Tile::Door => self.palette.door,
            Tile::Blank => CellStyle::default(),
        }
    }

    fn put_at(&self, fb: &mut FrameBuffer, pos: Position, ch: char, style: CellStyle) {
        if let Some((x, y)) = to_screen(pos) {
            fb.put_char(x, y, ch, style);
        }
    }
}

fn to_screen(pos: Position) -> Option<(u16, u16)> {
    let x = u16::try_from(pos.col).ok()?;
    let y = u16::try_from(pos.row).ok()?;
    Some((x, y))
}
