//! Phase A: balls interact with the terrain around them.

use std::collections::HashSet;

use crate::api::{TileApi, NEIGHBORS};
use crate::ball::{sort_by_position, Ball};
use crate::tile::Tile;
use crate::Grid;

/// Apply duplicators, chargers and lamps to every ball.
///
/// Neighbours are visited up, down, left, right. A charger flip takes effect
/// for the same ball's later neighbours; other balls never see it. Returns the
/// enlarged, re-sorted ball list and the number of duplicates created.
pub(crate) fn interact(grid: &mut Grid, mut balls: Vec<Ball>) -> (Vec<Ball>, usize) {
    sort_by_position(&mut balls);
    let mut occupied: HashSet<usize> = balls.iter().map(Ball::position).collect();
    let mut out = Vec::with_capacity(balls.len());
    let mut duplicated = 0;

    for mut ball in balls {
        let mut api = TileApi::new(grid, ball.position());
        for &(dx, dy) in &NEIGHBORS {
            match api.get(dx, dy) {
                Tile::Duplicator => {
                    // The copy lands one cell past the duplicator.
                    let mirror = api.index(2 * dx, 2 * dy);
                    if api.grid.get(mirror).is_passable() && occupied.insert(mirror) {
                        out.push(Ball::new(mirror, ball.facing_right, ball.charged));
                        duplicated += 1;
                    }
                }
                Tile::Charger => ball.charged = !ball.charged,
                Tile::LampOff if ball.charged => api.set(dx, dy, Tile::LampOn),
                Tile::LampOn if !ball.charged => api.set(dx, dy, Tile::LampOff),
                _ => {}
            }
        }
        out.push(ball);
    }

    sort_by_position(&mut out);
    (out, duplicated)
}
