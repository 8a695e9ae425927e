//! Level image codec: pixel buffer <-> (grid, balls).

use crate::ball::{Ball, BallSet};
use crate::error::DecodeError;
use crate::palette;
use crate::world::World;
use crate::Grid;

/// Row-major pixel buffer, one packed `0xAABBGGRR` color per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

/// Pixel count of a `width x height` level, or `None` when it or the padded
/// grid built from it does not fit in `usize`.
fn pixel_count(width: usize, height: usize) -> Option<usize> {
    width.checked_add(2)?.checked_mul(height.checked_add(2)?)?;
    width.checked_mul(height)
}

impl Image {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, DecodeError> {
        let expected = pixel_count(width, height).unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(DecodeError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an RGBA8 byte buffer, e.g. the data of a browser `ImageData`.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, DecodeError> {
        let expected = pixel_count(width, height)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if bytes.len() != expected {
            return Err(DecodeError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_le_bytes()).collect()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// Build a world from a level image.
///
/// Every pixel must be a tile or ball color; the first one that is neither
/// fails the whole decode.
pub fn decode(image: &Image) -> Result<World, DecodeError> {
    let mut grid = Grid::new(image.width, image.height);
    let mut balls = BallSet::new();

    for y in 0..image.height {
        for x in 0..image.width {
            let color = image.pixel(x, y);
            let index = grid.interior_index(x, y);
            if let Some(tile) = palette::tile_from_color(color) {
                grid.set(index, tile);
            } else if let Some(code) = palette::ball_code_from_color(color) {
                balls.push(Ball::from_code(index, code));
            } else {
                return Err(DecodeError::UnknownColor { x, y, color });
            }
        }
    }

    log::info!(
        "decoded {}x{} level with {} balls",
        image.width,
        image.height,
        balls.len()
    );
    Ok(World::new(grid, balls))
}

/// Render the padded world: tiles first, then balls on top.
#[must_use]
pub fn encode(world: &World) -> Image {
    let grid = world.grid();
    let mut pixels: Vec<u32> = grid.tiles().iter().map(|&t| palette::tile_color(t)).collect();
    for ball in world.balls() {
        if let Some(px) = pixels.get_mut(ball.position()) {
            *px = palette::ball_color(ball);
        }
    }
    Image {
        width: grid.width,
        height: grid.height,
        pixels,
    }
}

/// Render without the wall ring, at the level's original size.
#[must_use]
pub fn encode_interior(world: &World) -> Image {
    let padded = encode(world);
    let width = world.grid().interior_width();
    let height = world.grid().interior_height();
    let mut pixels = Vec::with_capacity(width * height);
    for y in 1..=height {
        let row = y * padded.width;
        pixels.extend_from_slice(&padded.pixels[row + 1..=row + width]);
    }
    Image {
        width,
        height,
        pixels,
    }
}
