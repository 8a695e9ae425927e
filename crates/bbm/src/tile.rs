//! Terrain kinds for the simulation grid.

use std::fmt;

/// Discriminant order matches the level palette code; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tile {
    #[default]
    Air = 0,
    Teleporter = 1,
    Wall = 2,
    Duplicator = 3,
    Charger = 4,
    LampOff = 5,
    LampOn = 6,
}

impl Tile {
    pub const ALL: [Tile; 7] = [
        Tile::Air,
        Tile::Teleporter,
        Tile::Wall,
        Tile::Duplicator,
        Tile::Charger,
        Tile::LampOff,
        Tile::LampOn,
    ];

    /// A ball may occupy or move through this tile.
    #[must_use]
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Air | Tile::Teleporter)
    }

    #[cfg(test)]
    pub(crate) fn is_lamp(self) -> bool {
        matches!(self, Tile::LampOff | Tile::LampOn)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "Air"),
            Self::Teleporter => write!(f, "Teleporter"),
            Self::Wall => write!(f, "Wall"),
            Self::Duplicator => write!(f, "Duplicator"),
            Self::Charger => write!(f, "Charger"),
            Self::LampOff => write!(f, "LampOff"),
            Self::LampOn => write!(f, "LampOn"),
        }
    }
}
