//! Phase C: gravity, teleporter relay, stacking and crushing.

use std::collections::HashSet;

use crate::ball::Ball;
use crate::tile::Tile;
use crate::Grid;

/// Drop, relay and stack every ball, walking `balls` back to front. The
/// list must be in the order the collision phase left it, which is position
/// order; two balls that ended on the same cell keep their collision order
/// and the later one claims first. Returns the surviving balls (in no
/// particular order) and how many were crushed.
pub(crate) fn settle(grid: &Grid, balls: Vec<Ball>) -> (Vec<Ball>, usize) {
    let mut claimed: HashSet<usize> = HashSet::with_capacity(balls.len());
    let mut kept = Vec::with_capacity(balls.len());
    let mut crushed = 0;

    for mut ball in balls.into_iter().rev() {
        let mut position = ball.position();

        let below = grid.offset(position, 0, 1);
        if grid.get(position) != Tile::Teleporter && grid.get(below) == Tile::Air {
            position = below;
        }

        // The top row is wall, so this always stops.
        while grid.get(position) == Tile::Teleporter || claimed.contains(&position) {
            position = grid.offset(position, 0, -1);
        }

        if grid.get(position) == Tile::Air {
            claimed.insert(position);
            ball.set_position(position);
            kept.push(ball);
        } else {
            crushed += 1;
        }
    }

    (kept, crushed)
}
