//! Billiard-ball-model grid automaton.
//!
//! Balls roll along grid rows, collide elastically, fall, and interact with
//! teleporters, duplicators, chargers and lamps. [`World::step`] advances the
//! whole world by one discrete tick.

pub mod api;
pub mod ball;
pub mod codec;
pub mod error;
pub mod palette;
pub mod phases;
pub mod schedule;
pub mod tile;
pub mod universe;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

pub use ball::{Ball, BallSet};
pub use codec::{decode, encode, encode_interior, Image};
pub use error::{DecodeError, InvariantViolation};
pub use tile::Tile;
pub use universe::Universe;
pub use world::{TickReport, World};

/// Padded tile grid. The outer ring is always `Wall`.
///
/// Out-of-bounds reads return Wall; writes outside the interior are no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// An all-air interior of the given size wrapped in one ring of wall.
    #[must_use]
    pub fn new(interior_width: usize, interior_height: usize) -> Self {
        let width = interior_width + 2;
        let height = interior_height + 2;
        let mut tiles = vec![Tile::Air; width * height];
        for (i, tile) in tiles.iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                *tile = Tile::Wall;
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    #[must_use]
    pub fn interior_width(&self) -> usize {
        self.width - 2
    }

    #[must_use]
    pub fn interior_height(&self) -> usize {
        self.height - 2
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Padded coordinates.
    #[cfg(test)]
    pub(crate) fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Flattened index of padded coordinates `(x, y)`.
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Flattened index of interior coordinates, i.e. level pixel `(x, y)`.
    #[must_use]
    pub fn interior_index(&self, x: usize, y: usize) -> usize {
        self.index(x + 1, y + 1)
    }

    /// Padded coordinates of a flattened index.
    #[must_use]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[must_use]
    pub fn is_border(&self, index: usize) -> bool {
        let (x, y) = self.coords(index);
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Index `(dx, dy)` away from `index`. Returns `usize::MAX` (which reads
    /// as Wall) when the target falls off the array.
    #[must_use]
    pub fn offset(&self, index: usize, dx: i32, dy: i32) -> usize {
        let target = index as isize + dy as isize * self.width as isize + dx as isize;
        usize::try_from(target).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Tile {
        self.tiles.get(index).copied().unwrap_or(Tile::Wall)
    }

    pub fn set(&mut self, index: usize, tile: Tile) {
        if index < self.tiles.len() && !self.is_border(index) {
            self.tiles[index] = tile;
        }
    }

    #[cfg(test)]
    pub(crate) fn get_xy(&self, x: i32, y: i32) -> Tile {
        if self.in_bounds(x, y) {
            self.get(self.index(x as usize, y as usize))
        } else {
            Tile::Wall
        }
    }

    #[cfg(test)]
    pub(crate) fn set_xy(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            self.set(self.index(x as usize, y as usize), tile);
        }
    }
}
