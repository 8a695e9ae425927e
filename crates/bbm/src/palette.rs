//! Level palette: fixed pixel colors for every tile kind and ball state.
//!
//! Colors are packed the way a little-endian `u32` read of an RGBA8 buffer
//! sees them, `0xAABBGGRR`.

use crate::ball::Ball;
use crate::tile::Tile;

pub const AIR: u32 = 0xFFFF_FFFF;
pub const TELEPORTER: u32 = 0xFFFF_00BF;
pub const WALL: u32 = 0xFF00_0000;
pub const DUPLICATOR: u32 = 0xFF00_EF00;
pub const CHARGER: u32 = 0xFF00_7FFF;
pub const LAMP_OFF: u32 = 0xFF00_4F7F;
pub const LAMP_ON: u32 = 0xFF00_FFFF;

/// Indexed by [`Ball::code`].
pub const BALL_COLORS: [u32; 4] = [0xFF7F_5F00, 0xFF00_007F, 0xFFFF_BF00, 0xFF00_00FF];

#[must_use]
pub fn tile_color(tile: Tile) -> u32 {
    match tile {
        Tile::Air => AIR,
        Tile::Teleporter => TELEPORTER,
        Tile::Wall => WALL,
        Tile::Duplicator => DUPLICATOR,
        Tile::Charger => CHARGER,
        Tile::LampOff => LAMP_OFF,
        Tile::LampOn => LAMP_ON,
    }
}

#[must_use]
pub fn tile_from_color(color: u32) -> Option<Tile> {
    match color {
        AIR => Some(Tile::Air),
        TELEPORTER => Some(Tile::Teleporter),
        WALL => Some(Tile::Wall),
        DUPLICATOR => Some(Tile::Duplicator),
        CHARGER => Some(Tile::Charger),
        LAMP_OFF => Some(Tile::LampOff),
        LAMP_ON => Some(Tile::LampOn),
        _ => None,
    }
}

#[must_use]
pub fn ball_color(ball: &Ball) -> u32 {
    BALL_COLORS[ball.code()]
}

/// Ball code (see [`Ball::code`]) for a ball color.
#[must_use]
pub fn ball_code_from_color(color: u32) -> Option<usize> {
    BALL_COLORS.iter().position(|&c| c == color)
}
