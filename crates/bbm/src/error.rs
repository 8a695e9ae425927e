//! Error types for level decoding and world invariant checks.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("pixel ({x}, {y}) has color {color:#010x}, which is neither a tile nor a ball")]
    UnknownColor { x: usize, y: usize, color: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// A world state the transition function must never produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("ball at half position {half} lies outside the grid interior")]
    OutOfGrid { half: usize },
    #[error("ball left between cells at half position {half}")]
    OffCell { half: usize },
    #[error("ball rests on {tile} at cell {position}")]
    NotAir { position: usize, tile: crate::tile::Tile },
    #[error("two balls share cell {position}")]
    Shared { position: usize },
    #[error("border cell {position} is {tile}, not Wall")]
    Border { position: usize, tile: crate::tile::Tile },
}
