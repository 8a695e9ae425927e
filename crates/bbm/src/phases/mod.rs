//! The three phases of a tick, run in order by [`crate::World::step`].
//!
//! Each phase takes the previous phase's ball list by value and returns a
//! fresh one, so no list is ever mutated while another phase reads it.

mod collide;
mod interact;
mod settle;

use crate::ball::Ball;
use crate::world::TickReport;
use crate::Grid;

/// Interaction, two collision half-steps, then settling.
pub(crate) fn advance(grid: &mut Grid, balls: Vec<Ball>) -> (Vec<Ball>, TickReport) {
    let (balls, duplicated) = interact::interact(grid, balls);
    let (balls, absorbed) = collide::collide(grid, balls);
    debug_assert!(
        balls.iter().all(Ball::is_on_cell),
        "ball left between cells after collision: {balls:?}"
    );
    let (balls, crushed) = settle::settle(grid, balls);
    (
        balls,
        TickReport {
            duplicated,
            absorbed,
            crushed,
        },
    )
}
