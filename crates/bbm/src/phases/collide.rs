//! Phase B: horizontal movement and ball-ball collisions.
//!
//! Balls are grouped into runs (same charge, neighbours at most one cell
//! apart). A run with open ends keeps as many left-movers and right-movers as
//! it had coming in, which is the elastic billiard rule; a run with one end
//! blocked recoils as a whole. A charged ball facing into a run of the other
//! charge is never passed: the ball of the run that would hit it is absorbed.

use crate::ball::Ball;
use crate::Grid;

/// Two half-steps, one full cell of displacement budget. Returns the moved
/// balls and how many were absorbed.
pub(crate) fn collide(grid: &Grid, balls: Vec<Ball>) -> (Vec<Ball>, usize) {
    let (balls, first) = half_step(grid, balls);
    let (balls, second) = half_step(grid, balls);
    (balls, first + second)
}

/// Exclusive end of the run starting at `start`, and whether the run stopped
/// at a ball of the other charge within one cell.
fn run_end(balls: &[Ball], start: usize) -> (usize, bool) {
    let charged = balls[start].charged;
    for j in start + 1..balls.len() {
        if balls[j].half_position() > balls[j - 1].half_position() + 2 {
            return (j, false);
        }
        if balls[j].charged != charged {
            return (j, true);
        }
    }
    (balls.len(), false)
}

/// Move every ball half a cell (or not at all). `balls` must be in
/// position order; the order is preserved.
pub(crate) fn half_step(grid: &Grid, mut balls: Vec<Ball>) -> (Vec<Ball>, usize) {
    let mut keep = vec![true; balls.len()];
    let mut prev_adjacent: Option<usize> = None;
    let mut i = 0;

    while i < balls.len() {
        let (end, stopped_by_charge) = run_end(&balls, i);
        let next_adjacent = stopped_by_charge.then_some(end);
        let len = end - i;

        let open_left = grid.get(balls[i].left_cell()).is_passable();
        let open_right = grid.get(balls[end - 1].right_cell()).is_passable();

        if open_left || open_right {
            let split = match (open_left, open_right) {
                (true, true) => balls[i..end].iter().filter(|b| !b.facing_right).count(),
                (true, false) => len,
                _ => 0,
            };

            // A charged ball heading into the run blocks one end. The previous
            // neighbour has already moved this half-step.
            let (mut lo, mut hi) = (0, len);
            if split < hi && next_adjacent.is_some_and(|j| !balls[j].facing_right && balls[j].charged) {
                hi -= 1;
            } else if split > lo && prev_adjacent.is_some_and(|j| balls[j].facing_right && balls[j].charged) {
                lo += 1;
            }

            for k in 0..len {
                if k < lo || k >= hi {
                    keep[i + k] = false;
                    continue;
                }
                let ball = &mut balls[i + k];
                ball.facing_right = k >= split;
                ball.half_step();
            }
        }

        prev_adjacent = next_adjacent.map(|j| j - 1);
        i = end;
    }

    let before = balls.len();
    let mut flags = keep.into_iter();
    balls.retain(|_| flags.next().unwrap_or(true));
    let absorbed = before - balls.len();
    (balls, absorbed)
}
